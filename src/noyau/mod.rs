//! Noyau d'évaluation de la calculatrice par signes
//!
//! Organisation interne :
//! - jetons.rs    : tables de symboles (alias, précédence) + prédicats + normalisation
//! - grammaire.rs : validation `nombre (opérateur nombre)*`
//! - rpn.rs       : shunting-yard -> postfixe
//! - demarche.rs  : trace pas-à-pas de l'évaluation
//! - erreur.rs    : taxonomie d'erreurs (toutes non fatales)
//! - bilan.rs     : issue réussite/échec + sérialisation
//! - eval.rs      : pipeline complet

pub mod bilan;
pub mod demarche;
pub mod erreur;
pub mod eval;
pub mod grammaire;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use bilan::{Bilan, Echec, Reussite};
pub use demarche::Etape;
pub use erreur::ErreurEval;
pub use eval::evaluer;
