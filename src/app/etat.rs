//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’affichage de la calculatrice et offrir les opérations
//! simples (ajout d’une touche, C, dépôt d’un résultat ou d’une erreur).
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - Une erreur remplace l’affichage par un marqueur unique, quel que soit son genre.

use crate::noyau::{format_resultat, EvalError};

/// Texte affiché à la place du résultat quand l’évaluation échoue.
pub const MARQUEUR_ERREUR: &str = "Error";

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    /// Tampon d’affichage : touches accumulées, puis résultat ou marqueur.
    pub affichage: String,
}

impl AppCalc {
    /// Touche “normale” (chiffre ou opérateur) : ajoutée telle quelle.
    pub fn ajouter(&mut self, label: &str) {
        self.affichage.push_str(label);
    }

    /// C : vide l’affichage.
    pub fn clear_affichage(&mut self) {
        self.affichage.clear();
    }

    pub fn set_resultat(&mut self, v: f64) {
        self.affichage = format_resultat(v);
    }

    /// Le genre d’erreur est journalisé puis oublié : l’affichage ne montre que le marqueur.
    pub fn set_erreur(&mut self, e: &EvalError) {
        tracing::debug!(erreur = %e, entree = %self.affichage, "affichage remplacé par le marqueur");
        self.affichage = MARQUEUR_ERREUR.to_string();
    }
}
