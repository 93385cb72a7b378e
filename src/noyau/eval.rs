//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> deux piles (valeurs + opérateurs) -> f64
//!
//! Règle de précédence : un opérateur entrant résout le sommet de la pile
//! sauf si l’entrant est `*`/`/` et le sommet `+`/`-`.
//! À précédence égale, le sommet part d’abord (gauche à droite).

use super::erreur::EvalError;
use super::jetons::{format_tokens, tokenize, Op, Tok};

/// API publique : évalue le texte de l’affichage.
pub fn evaluate(texte: &str) -> Result<f64, EvalError> {
    let jetons = tokenize(texte)?;
    tracing::debug!(entree = texte, jetons = %format_tokens(&jetons), "évaluation");

    let res = evaluate_tokens(&jetons);
    match &res {
        Ok(v) => tracing::debug!(resultat = v, "évaluation réussie"),
        Err(e) => tracing::debug!(erreur = %e, "évaluation refusée"),
    }
    res
}

/// Évalue une suite de jetons avec une pile de valeurs et une pile d’opérateurs.
pub fn evaluate_tokens(jetons: &[Tok]) -> Result<f64, EvalError> {
    if jetons.is_empty() {
        return Err(EvalError::EmptyExpression);
    }
    verifie_alternance(jetons)?;

    let mut valeurs: Vec<f64> = Vec::with_capacity(jetons.len() / 2 + 1);
    let mut ops: Vec<Op> = Vec::new();

    for tok in jetons.iter().copied() {
        match tok {
            Tok::Num(v) => valeurs.push(v),

            Tok::Op(op) => {
                while let Some(&sommet) = ops.last() {
                    if sommet.precedence() < op.precedence() {
                        break;
                    }
                    ops.pop();
                    reduire(&mut valeurs, sommet)?;
                }
                ops.push(op);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        reduire(&mut valeurs, op)?;
    }

    // alternance vérifiée : il reste exactement une valeur
    valeurs.pop().ok_or(EvalError::StackUnderflow)
}

/// Structure attendue : nombre (op nombre)*.
///
/// Vérifiée avant toute application : "2+0/" doit échouer sur l’opérande manquant,
/// pas sur une division calculée avec les mauvais opérandes.
fn verifie_alternance(jetons: &[Tok]) -> Result<(), EvalError> {
    let mut attend_valeur = true;

    for (i, tok) in jetons.iter().enumerate() {
        match (tok, attend_valeur) {
            (Tok::Num(_), true) | (Tok::Op(_), false) => attend_valeur = !attend_valeur,
            (Tok::Op(_), true) => return Err(EvalError::StackUnderflow),
            (Tok::Num(_), false) => {
                return Err(EvalError::MalformedExpression(format!(
                    "deux nombres consécutifs (jeton {i})"
                )))
            }
        }
    }

    if attend_valeur {
        return Err(EvalError::StackUnderflow);
    }
    Ok(())
}

/// Dépile droite puis gauche, applique `op`, empile le résultat.
fn reduire(valeurs: &mut Vec<f64>, op: Op) -> Result<(), EvalError> {
    let droite = valeurs.pop().ok_or(EvalError::StackUnderflow)?;
    let gauche = valeurs.pop().ok_or(EvalError::StackUnderflow)?;
    valeurs.push(op.appliquer(gauche, droite)?);
    Ok(())
}
