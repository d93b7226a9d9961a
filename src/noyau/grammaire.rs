// src/noyau/grammaire.rs
//
// Validation grammaticale : forme stricte `nombre (opérateur nombre)*`.
//
// Les vérifications court-circuitent à la première violation, dans
// l'ordre : non-vide, premier jeton, dernier jeton, alternance.
// Un échec est une donnée (ErreurEval), jamais une panique.
//
// NOTE: pas de moins unaire, pas de multiplication implicite, et les
// parenthèses ne passent pas l'alternance — une entrée avec `(`/`)` est
// donc rejetée ici (comportement assumé, voir DESIGN.md).

use super::erreur::ErreurEval;
use super::jetons::{est_nombre, est_operateur};

/// Valide une suite de jetons déjà normalisés.
///
/// Positions rapportées en base 1, avec le jeton fautif.
pub fn valider(jetons: &[String]) -> Result<(), ErreurEval> {
    if jetons.is_empty() {
        return Err(ErreurEval::ExpressionVide);
    }

    if !est_nombre(&jetons[0]) {
        return Err(ErreurEval::DoitCommencerParNombre);
    }

    if !est_nombre(&jetons[jetons.len() - 1]) {
        return Err(ErreurEval::DoitTerminerParNombre);
    }

    for (i, jeton) in jetons.iter().enumerate() {
        if i % 2 == 0 {
            // positions paires (0-based) : nombres
            if !est_nombre(jeton) {
                return Err(ErreurEval::NombreAttendu {
                    position: i + 1,
                    jeton: jeton.clone(),
                });
            }
        } else if !est_operateur(jeton) {
            // positions impaires : opérateurs canoniques
            return Err(ErreurEval::OperateurAttendu {
                position: i + 1,
                jeton: jeton.clone(),
            });
        }
    }

    Ok(())
}
