pub mod compare;
pub mod corpus;
pub mod keywords;
pub mod term;
pub mod tfidf;
pub mod tokenizer;
