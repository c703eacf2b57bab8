use crate::types::{TermFrequencyVector, Token, TokenId, TokenRef};
use std::collections::HashMap;

/// Index space shared by the documents of a single comparison.
///
/// Ids are assigned in first-encounter order and are contiguous from `0`, so the same input
/// sequences always produce the same vocabulary.
#[derive(Debug, Default, Clone)]
pub struct Vocabulary {
    token_map: HashMap<Token, TokenId>,
    reverse_token_map: Vec<Token>,
}

impl Vocabulary {
    /// Creates an empty Vocabulary
    pub fn new() -> Self {
        Vocabulary {
            token_map: HashMap::new(),
            reverse_token_map: Vec::new(),
        }
    }

    /// Builds a vocabulary over the union of the given token sequences.
    pub fn from_token_sequences<T: AsRef<TokenRef>>(sequences: &[&[T]]) -> Self {
        let mut vocabulary = Self::new();

        for tokens in sequences {
            vocabulary.upsert_tokens(tokens);
        }

        vocabulary
    }

    /// Adds a token to the vocabulary if it doesn't exist, and returns its id
    pub fn upsert_token(&mut self, token: &TokenRef) -> TokenId {
        if let Some(&id) = self.token_map.get(token) {
            id
        } else {
            let id = self.reverse_token_map.len();
            self.token_map.insert(token.to_string(), id);
            self.reverse_token_map.push(token.to_string());
            id
        }
    }

    pub fn upsert_tokens<T: AsRef<TokenRef>>(&mut self, tokens: &[T]) {
        for token in tokens {
            self.upsert_token(token.as_ref());
        }
    }

    /// Gets the id for a token, or None if the token is not present
    pub fn get_token_id(&self, token: &TokenRef) -> Option<TokenId> {
        self.token_map.get(token).copied()
    }

    pub fn get_token_by_id(&self, token_id: TokenId) -> Option<&TokenRef> {
        self.reverse_token_map
            .get(token_id)
            .map(|token| token.as_str())
    }

    /// Distinct tokens, positioned by id.
    pub fn tokens(&self) -> &[Token] {
        &self.reverse_token_map
    }

    /// Gets the total number of unique tokens
    pub fn get_token_count(&self) -> usize {
        self.reverse_token_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reverse_token_map.is_empty()
    }

    /// Counts each token of `tokens` into a vector sized to this vocabulary.
    ///
    /// Tokens the vocabulary doesn't know are skipped.
    pub fn to_term_frequency_vector<T: AsRef<TokenRef>>(
        &self,
        tokens: &[T],
    ) -> TermFrequencyVector {
        let mut vector = vec![0.0; self.get_token_count()];

        for token in tokens {
            if let Some(id) = self.get_token_id(token.as_ref()) {
                vector[id] += 1.0;
            }
        }

        vector
    }
}
