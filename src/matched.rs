/// The shape of a value produced by concatenating parsers.
///
/// Leaf parsers such as [`word`](crate::word::word) produce tokens, while
/// [`cat`](crate::cat::cat) and the repetition combinators produce sequences.
/// Concatenation normalizes both sides with [`Match::into_seq`] before
/// appending, so a token contributes one element and a sequence contributes
/// its elements. Sequences nested inside a sequence are kept as elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match<'code> {
    Token(&'code str),
    Seq(Vec<Match<'code>>),
}

impl<'code> Match<'code> {
    /// Normalize to a sequence: a token becomes a one-element sequence
    pub fn into_seq(self) -> Vec<Match<'code>> {
        match self {
            Match::Token(token) => vec![Match::Token(token)],
            Match::Seq(items) => items,
        }
    }

    /// True for the empty sequence
    pub fn is_empty(&self) -> bool {
        matches!(self, Match::Seq(items) if items.is_empty())
    }

    pub fn as_token(&self) -> Option<&'code str> {
        match self {
            Match::Token(token) => Some(*token),
            Match::Seq(_) => None,
        }
    }

    /// Every token in depth-first order
    pub fn tokens(&self) -> Vec<&'code str> {
        let mut tokens = Vec::new();
        self.collect_tokens(&mut tokens);
        tokens
    }

    fn collect_tokens(&self, tokens: &mut Vec<&'code str>) {
        match self {
            Match::Token(token) => tokens.push(*token),
            Match::Seq(items) => {
                for item in items {
                    item.collect_tokens(tokens);
                }
            }
        }
    }
}

impl<'code> From<&'code str> for Match<'code> {
    fn from(token: &'code str) -> Self {
        Match::Token(token)
    }
}

impl<'code> From<Vec<Match<'code>>> for Match<'code> {
    fn from(items: Vec<Match<'code>>) -> Self {
        Match::Seq(items)
    }
}
