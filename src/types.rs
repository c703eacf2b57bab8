// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the normalized, lower-cased words
/// produced from profile and posting text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A unique identifier for a token within a single `Vocabulary`. Ids are contiguous from `0`.
pub type TokenId = usize;

/// A term-frequency vector, sized to a `Vocabulary`, where position `i` holds the number of
/// occurrences of token `i`. Values are always whole, non-negative numbers.
pub type TermFrequencyVector = Vec<f32>;

/// Cosine similarity between two documents, in `[0, 1]`.
pub type SimilarityScore = f64;

/// Identifies a posting within a catalog.
pub type PostingId = String;

/// A skill name as declared on a student profile or posting (e.g. `"React"`).
pub type SkillName = String;
