/// The pieces of a relationships line, borrowed from the line itself.
///
/// Names are returned untrimmed. `posters` is `None` when nothing
/// separated by whitespace follows the keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowLine<'a> {
    pub follower: &'a str,
    pub posters: Option<&'a str>,
}

/// The pieces of a posts line, split on the first usable `>`.
#[derive(Debug, Clone, PartialEq)]
pub struct PostLine<'a> {
    pub author: &'a str,
    pub message: &'a str,
}

/// Whitespace as the feeds understand it: Unicode whitespace plus the
/// ASCII separator controls 0x1C..=0x1F.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Strip [`is_space`] characters from both ends.
pub fn trim_space(s: &str) -> &str {
    s.trim_matches(is_space)
}

const KEYWORD: &str = "follows";
const DELIMITER: char = '>';

pub struct Tokenizer<'a> {
    input: &'a str,
    chars: Vec<(usize, char)>,
    position: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().collect(),
            position: 0,
        }
    }

    /// Recognise `<follower> follows[ <posters>]`.
    ///
    /// The keyword is matched case-insensitively and needs a whitespace
    /// character right before it, so a keyword glued to the previous word
    /// does not count. One leading whitespace character is skipped first;
    /// when that leaves no match, the line is scanned again from the start.
    pub fn follow_line(&mut self) -> Option<FollowLine<'a>> {
        if is_space(self.peek_char()) {
            self.advance(1);
            if let Some(line) = self.scan_follow_line() {
                return Some(line);
            }
        }
        self.position = 0;
        self.scan_follow_line()
    }

    /// Recognise `<author>><message>`. The author needs at least one
    /// character, so a line opening with `>` splits on the next one.
    pub fn post_line(&mut self) -> Option<PostLine<'a>> {
        let start = self.position;
        // Author takes at least one character
        self.advance(1);
        while self.position < self.chars.len() {
            if self.peek_char() == DELIMITER {
                let author = self.slice(start, self.position);
                self.advance(1);
                let message = self.slice(self.position, self.chars.len());
                return Some(PostLine { author, message });
            }
            self.advance(1);
        }
        None
    }

    fn scan_follow_line(&mut self) -> Option<FollowLine<'a>> {
        let start = self.position;
        // Follower takes at least one character
        self.advance(1);
        while self.position < self.chars.len() {
            if is_space(self.peek_char()) && self.keyword_at(self.position + 1) {
                let follower = self.slice(start, self.position);
                self.advance(1 + KEYWORD.len());
                let posters = if is_space(self.peek_char()) {
                    Some(self.slice(self.position, self.chars.len()))
                } else {
                    None
                };
                return Some(FollowLine { follower, posters });
            }
            self.advance(1);
        }
        None
    }

    fn keyword_at(&self, position: usize) -> bool {
        let end = position + KEYWORD.len();
        if end > self.chars.len() {
            return false;
        }
        self.chars[position..end]
            .iter()
            .zip(KEYWORD.chars())
            .all(|(&(_, c), k)| c.eq_ignore_ascii_case(&k))
    }

    /// Borrow the input between two char positions.
    fn slice(&self, from: usize, to: usize) -> &'a str {
        let begin = self.byte_offset(from);
        let end = self.byte_offset(to);
        &self.input[begin..end]
    }

    fn byte_offset(&self, position: usize) -> usize {
        self.chars
            .get(position)
            .map(|&(offset, _)| offset)
            .unwrap_or(self.input.len())
    }

    fn peek_char(&self) -> char {
        self.chars
            .get(self.position)
            .map(|&(_, c)| c)
            .unwrap_or('\0')
    }

    fn advance(&mut self, count: usize) {
        self.position = std::cmp::min(self.position + count, self.chars.len());
    }
}
