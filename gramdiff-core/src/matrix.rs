//! Sparse Document-Term Count Matrix
//!
//! Postings-list representation of one n-gram order's counts. Terms
//! are assigned columns in first-occurrence order, which fixes the
//! output row order and keeps re-runs byte-identical.

use std::collections::HashMap;

/// Occurrence count of one term in one document (count > 0).
#[derive(Debug, Clone, Copy)]
pub struct Posting {
    pub doc: u32,
    pub count: u32,
}

/// Sparse document x term count matrix for a single n-gram order.
#[derive(Debug, Default)]
pub struct TermMatrix {
    terms: Vec<String>,
    index: HashMap<String, u32>,
    postings: Vec<Vec<Posting>>,
    doc_count: usize,
}

impl TermMatrix {
    /// Build from per-document token streams. A document with no
    /// tokens contributes nothing; a corpus producing no terms yields
    /// an empty matrix, not an error.
    pub fn from_token_streams<I>(streams: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut matrix = TermMatrix::default();
        for tokens in streams {
            let doc = matrix.doc_count as u32;
            matrix.doc_count += 1;

            let mut local: HashMap<u32, u32> = HashMap::new();
            for token in tokens {
                let id = match matrix.index.get(&token) {
                    Some(&id) => id,
                    None => {
                        let id = matrix.terms.len() as u32;
                        matrix.index.insert(token.clone(), id);
                        matrix.terms.push(token);
                        matrix.postings.push(Vec::new());
                        id
                    }
                };
                *local.entry(id).or_insert(0) += 1;
            }
            for (id, count) in local {
                matrix.postings[id as usize].push(Posting { doc, count });
            }
        }
        matrix
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of documents the matrix was built over.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Terms in column (first-occurrence) order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Postings for one term column, in document order.
    pub fn postings(&self, term: usize) -> &[Posting] {
        &self.postings[term]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_keep_first_occurrence_order() {
        let matrix = TermMatrix::from_token_streams(vec![
            vec!["economy".into(), "shock".into(), "economy".into()],
            vec!["fraud".into(), "shock".into()],
        ]);
        assert_eq!(matrix.terms(), ["economy", "shock", "fraud"]);
        assert_eq!(matrix.doc_count(), 2);
    }

    #[test]
    fn test_postings_carry_per_document_counts() {
        let matrix = TermMatrix::from_token_streams(vec![
            vec!["economy".into(), "economy".into()],
            vec![],
            vec!["economy".into()],
        ]);
        let postings = matrix.postings(0);
        assert_eq!(postings.len(), 2);
        assert_eq!((postings[0].doc, postings[0].count), (0, 2));
        assert_eq!((postings[1].doc, postings[1].count), (2, 1));
    }

    #[test]
    fn test_empty_corpus_yields_empty_matrix() {
        let matrix = TermMatrix::from_token_streams(Vec::<Vec<String>>::new());
        assert!(matrix.is_empty());
        assert_eq!(matrix.doc_count(), 0);
    }
}
