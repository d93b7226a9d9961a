//! Démarche d'évaluation : trace ordonnée de chaque pas de l'évaluation
//! postfixe, exposée telle quelle à l'appelant (explicabilité côté
//! interface). Construite une fois, jamais mutée ensuite.

use serde::Serialize;

/// Un pas d'évaluation, avec instantané de la pile juste après le pas.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Etape {
    /// Un nombre lu et empilé.
    EmpilerNombre {
        jeton: String,
        valeur: f64,
        pile: Vec<f64>,
    },
    /// Un opérateur binaire appliqué : `operande_a <op> operande_b`.
    AppliquerOperation {
        operateur: String,
        operande_a: f64,
        operande_b: f64,
        resultat: f64,
        /// Rendu lisible : "{a} {op} {b} = {resultat}".
        expression: String,
        pile: Vec<f64>,
    },
}

impl Etape {
    /// Vrai pour les pas d'application d'opérateur (base du compteur
    /// `nb_operations` du bilan).
    pub fn est_operation(&self) -> bool {
        matches!(self, Etape::AppliquerOperation { .. })
    }
}
