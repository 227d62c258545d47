/// A token is the wordwise classification of one whitespace-delimited word.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Pipe operator `|`.
    Pipe,

    /// Input redirection operator `<`.
    FileRead,

    /// Output redirection operator `>`.
    FileWrite,

    /// Appending output redirection operator `>>`.
    FileAppend,

    /// Background marker `&`.
    Amp,

    /// Any other word.
    Literal(&'a str),
}

impl<'a> From<&'a str> for Token<'a> {
    fn from(word: &'a str) -> Self {
        match word {
            // A doubled pipe is equivalent to a single pipe: the second pipe
            // would meet an empty stage and be dropped.
            "|" | "||" => Token::Pipe,
            "<" => Token::FileRead,
            ">" => Token::FileWrite,
            ">>" => Token::FileAppend,
            "&" => Token::Amp,
            _ => Token::Literal(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_operators() {
        assert_eq!(Token::from("|"), Token::Pipe);
        assert_eq!(Token::from("||"), Token::Pipe);
        assert_eq!(Token::from("<"), Token::FileRead);
        assert_eq!(Token::from(">"), Token::FileWrite);
        assert_eq!(Token::from(">>"), Token::FileAppend);
        assert_eq!(Token::from("&"), Token::Amp);
    }

    #[test]
    fn classify_words() {
        assert_eq!(Token::from("ls"), Token::Literal("ls"));
        assert_eq!(Token::from(">>>"), Token::Literal(">>>"));
        assert_eq!(Token::from("&&"), Token::Literal("&&"));
        assert_eq!(Token::from("a|b"), Token::Literal("a|b"));
    }
}
