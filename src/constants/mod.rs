pub mod seed_terms;
