//! Bilan d'évaluation : réussite ou échec, en union discriminée.
//!
//! C'est la forme que la couche HTTP (hors de ce crate) sérialise vers le
//! tableau de bord. Le discriminant part sur le fil comme un booléen
//! `succes`, d'où le `Serialize` écrit à la main plutôt que dérivé.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::demarche::Etape;
use super::erreur::ErreurEval;

/// Évaluation aboutie : résultat scalaire + tout le contexte dérivé.
#[derive(Clone, Debug, PartialEq)]
pub struct Reussite {
    pub resultat: f64,
    pub jetons_originaux: Vec<String>,
    pub jetons_normalises: Vec<String>,
    /// Jetons normalisés joints par des espaces.
    pub expression_infixe: String,
    pub expression_postfixe: Vec<String>,
    pub demarche: Vec<Etape>,
    /// Nombre de pas `AppliquerOperation` dans la démarche.
    pub nb_operations: usize,
}

/// Évaluation échouée : la raison + ce que la normalisation a produit
/// avant l'échec (au mieux; jamais de résultat numérique partiel).
#[derive(Clone, Debug, PartialEq)]
pub struct Echec {
    pub erreur: ErreurEval,
    pub jetons_originaux: Vec<String>,
    pub jetons_normalises: Vec<String>,
}

/// Issue d'un appel à `evaluer` : exactement un des deux états terminaux.
#[derive(Clone, Debug, PartialEq)]
pub enum Bilan {
    Reussite(Reussite),
    Echec(Echec),
}

impl Bilan {
    pub fn est_reussite(&self) -> bool {
        matches!(self, Bilan::Reussite(_))
    }

    /// Résultat scalaire, absent sur échec.
    pub fn resultat(&self) -> Option<f64> {
        match self {
            Bilan::Reussite(r) => Some(r.resultat),
            Bilan::Echec(_) => None,
        }
    }

    /// Raison de l'échec, absente sur réussite.
    pub fn erreur(&self) -> Option<&ErreurEval> {
        match self {
            Bilan::Reussite(_) => None,
            Bilan::Echec(e) => Some(&e.erreur),
        }
    }

    /// Jetons normalisés, présents dans les deux issues.
    pub fn jetons_normalises(&self) -> &[String] {
        match self {
            Bilan::Reussite(r) => &r.jetons_normalises,
            Bilan::Echec(e) => &e.jetons_normalises,
        }
    }
}

impl Serialize for Bilan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Bilan::Reussite(r) => {
                let mut s = serializer.serialize_struct("Bilan", 8)?;
                s.serialize_field("succes", &true)?;
                s.serialize_field("resultat", &r.resultat)?;
                s.serialize_field("jetons_originaux", &r.jetons_originaux)?;
                s.serialize_field("jetons_normalises", &r.jetons_normalises)?;
                s.serialize_field("expression_infixe", &r.expression_infixe)?;
                s.serialize_field("expression_postfixe", &r.expression_postfixe)?;
                s.serialize_field("demarche", &r.demarche)?;
                s.serialize_field("nb_operations", &r.nb_operations)?;
                s.end()
            }
            Bilan::Echec(e) => {
                let mut s = serializer.serialize_struct("Bilan", 4)?;
                s.serialize_field("succes", &false)?;
                // message lisible, pas la structure interne de l'erreur
                s.serialize_field("erreur", &e.erreur.to_string())?;
                s.serialize_field("jetons_originaux", &e.jetons_originaux)?;
                s.serialize_field("jetons_normalises", &e.jetons_normalises)?;
                s.end()
            }
        }
    }
}
