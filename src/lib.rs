//! Calculatrice par signes — noyau d'évaluation d'expressions.
//!
//! La chaîne amont (reconnaissance de signes + couche HTTP, hors de ce
//! crate) prédit des jetons texte : nombres et noms d'opérateurs
//! (« 2 », « mas », « 3 »). Ce noyau les normalise, valide la grammaire
//! `nombre (opérateur nombre)*`, convertit en postfixe (shunting-yard)
//! et évalue en traçant chaque étape.
//!
//! Tout est pur et synchrone : aucune E/S, aucun état partagé mutable.
//! Les deux tables de symboles (alias, précédence) sont figées à la
//! compilation.

pub mod noyau;

pub use noyau::{evaluer, Bilan, Echec, ErreurEval, Etape, Reussite};
