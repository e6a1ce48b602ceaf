// Text-entry accumulator

/// Characters typed since the last line reset, plus line-boundary state.
///
/// Feeding behavior:
/// - the first character after a completed line clears the accumulator
/// - backspace removes the last accumulated character (no-op when empty)
/// - any other character (carriage return included) is appended and becomes
///   the last-received character
/// - carriage return additionally marks the line complete, so the buffer
///   keeps holding the finished line until the next character arrives
#[derive(Debug, Clone)]
pub struct TextInput {
    text: String,
    last_char: char,
    new_line: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            last_char: '\0',
            new_line: true,
        }
    }

    /// Feed one typed character.
    pub fn push(&mut self, ch: char) {
        if self.new_line {
            self.text.clear();
            self.new_line = false;
        }
        if ch == '\u{8}' {
            self.text.pop();
        } else {
            self.text.push(ch);
            self.last_char = ch;
        }
        if ch == '\r' {
            self.new_line = true;
        }
    }

    /// The accumulated text, including a trailing carriage return on a
    /// completed line.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The most recent non-backspace character received.
    pub fn last_char(&self) -> char {
        self.last_char
    }

    /// Whether the next character starts a fresh accumulation.
    pub fn at_line_start(&self) -> bool {
        self.new_line
    }

    /// Discard the accumulated text without touching line state.
    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}
