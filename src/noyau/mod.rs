//! Noyau de la calculatrice (f64)
//!
//! Organisation interne :
//! - erreur.rs : EvalError (taxonomie des refus)
//! - jetons.rs : Op + Tok + tokenisation
//! - eval.rs   : évaluation à deux piles (valeurs / opérateurs)
//! - format.rs : texte affiché pour un résultat

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::EvalError;
pub use eval::evaluate;
pub use format::format_resultat;
