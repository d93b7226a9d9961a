// src/noyau/erreur.rs
//
// Taxonomie d'erreurs du noyau : chaque chemin d'échec est une variante,
// donc énumérable et testable (pas de frontière attrape-tout).
// Aucune n'est fatale : tout remonte en donnée via le Bilan.

use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurEval {
    /// Suite de jetons vide.
    ExpressionVide,
    /// Le premier jeton n'est pas un nombre.
    DoitCommencerParNombre,
    /// Le dernier jeton n'est pas un nombre.
    DoitTerminerParNombre,
    /// Position paire (1-based impaire) occupée par autre chose qu'un nombre.
    NombreAttendu { position: usize, jeton: String },
    /// Position impaire occupée par autre chose qu'un opérateur canonique.
    OperateurAttendu { position: usize, jeton: String },
    /// Opérateur rencontré avec moins de deux valeurs sur la pile.
    OperandesManquants { operateur: String },
    /// Division dont le diviseur vaut exactement zéro.
    DivisionParZero,
    /// La pile ne se réduit pas à une valeur unique.
    ExpressionMalformee,
    /// Jeton attendu numérique qui ne se convertit pas en f64.
    NombreInvalide { jeton: String },
}

impl fmt::Display for ErreurEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpressionVide => write!(f, "expression vide"),
            Self::DoitCommencerParNombre => {
                write!(f, "l'expression doit commencer par un nombre")
            }
            Self::DoitTerminerParNombre => {
                write!(f, "l'expression doit se terminer par un nombre")
            }
            Self::NombreAttendu { position, jeton } => {
                write!(f, "nombre attendu en position {position}, trouvé '{jeton}'")
            }
            Self::OperateurAttendu { position, jeton } => {
                write!(f, "opérateur attendu en position {position}, trouvé '{jeton}'")
            }
            Self::OperandesManquants { operateur } => {
                write!(f, "l'opérateur '{operateur}' requiert deux opérandes")
            }
            Self::DivisionParZero => write!(f, "division par zéro"),
            Self::ExpressionMalformee => write!(f, "expression malformée"),
            Self::NombreInvalide { jeton } => write!(f, "nombre invalide: '{jeton}'"),
        }
    }
}

impl Error for ErreurEval {}
