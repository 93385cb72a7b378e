// src/noyau/erreur.rs

/// Erreurs du noyau.
///
/// Toutes sont récupérables par l’utilisateur : l’UI affiche un marqueur
/// générique et l’utilisateur efface puis recommence.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// Caractère non supporté, ou jetons qui ne forment pas une expression.
    #[error("expression invalide: {0}")]
    MalformedExpression(String),

    /// Suite de chiffres/points qui n’est pas un nombre décimal.
    #[error("nombre invalide: {0:?}")]
    NumberFormat(String),

    #[error("entrée vide")]
    EmptyExpression,

    /// Opérateur appliqué sans deux opérandes (ex: "2+", "+2", "2++3").
    #[error("opérande manquant")]
    StackUnderflow,

    #[error("division par zéro")]
    DivisionByZero,
}
