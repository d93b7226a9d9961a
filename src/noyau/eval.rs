//! Noyau — évaluation (pipeline complet)
//!
//! normaliser -> valider -> vers_postfixe -> evaluer_postfixe -> Bilan
//!
//! Machine d'états par appel :
//! `départ → normalisé → validé (ok|échec) → [converti → évalué (ok|échec)] → bilan`
//! Deux états terminaux (Reussite / Echec), aucun état conservé entre
//! les appels.

use num_traits::Zero;

use super::bilan::{Bilan, Echec, Reussite};
use super::demarche::Etape;
use super::erreur::ErreurEval;
use super::grammaire::valider;
use super::jetons::{est_nombre, est_operateur, normaliser};
use super::rpn::vers_postfixe;

/// Évalue une suite postfixe : résultat scalaire + démarche complète.
///
/// Pile de valeurs classique :
/// - nombre : converti en f64, empilé, pas `EmpilerNombre` tracé;
/// - opérateur : dépile b PUIS a (b = opérande droit, empilé en dernier),
///   applique, rempile, pas `AppliquerOperation` tracé;
/// - à la fin la pile doit contenir exactement une valeur.
///
/// Division par zéro refusée explicitement : jamais d'`inf`/`NaN` maquillé
/// en résultat.
pub fn evaluer_postfixe(postfixe: &[String]) -> Result<(f64, Vec<Etape>), ErreurEval> {
    let mut pile: Vec<f64> = Vec::new();
    let mut demarche: Vec<Etape> = Vec::new();

    for jeton in postfixe {
        if est_nombre(jeton) {
            let valeur: f64 = jeton.parse().map_err(|_| ErreurEval::NombreInvalide {
                jeton: jeton.clone(),
            })?;

            pile.push(valeur);
            demarche.push(Etape::EmpilerNombre {
                jeton: jeton.clone(),
                valeur,
                pile: pile.clone(),
            });
        } else if est_operateur(jeton) {
            // b d'abord : l'opérande empilé en dernier est le côté droit
            let b = pile.pop().ok_or_else(|| ErreurEval::OperandesManquants {
                operateur: jeton.clone(),
            })?;
            let a = pile.pop().ok_or_else(|| ErreurEval::OperandesManquants {
                operateur: jeton.clone(),
            })?;

            let resultat = match jeton.as_str() {
                "+" => a + b,
                "-" => a - b,
                "*" => a * b,
                "/" => {
                    if b.is_zero() {
                        return Err(ErreurEval::DivisionParZero);
                    }
                    a / b
                }
                // est_operateur ne reconnaît que les quatre canoniques
                _ => unreachable!(),
            };

            pile.push(resultat);
            demarche.push(Etape::AppliquerOperation {
                operateur: jeton.clone(),
                operande_a: a,
                operande_b: b,
                resultat,
                expression: format!("{a} {jeton} {b} = {resultat}"),
                pile: pile.clone(),
            });
        }
        // autres jetons (parenthèses résiduelles) : ignorés
    }

    // trop d'opérandes restants OU flux jamais réduit => malformée
    if pile.len() != 1 {
        return Err(ErreurEval::ExpressionMalformee);
    }

    Ok((pile[0], demarche))
}

/// API publique : évalue une suite de jetons bruts et assemble le bilan.
///
/// Échec du validateur => court-circuit avec les jetons normalisés déjà
/// calculés, sans tenter conversion ni évaluation. Échec d'évaluation =>
/// même forme d'échec. Aucun chemin ne panique.
pub fn evaluer(jetons: &[String]) -> Bilan {
    // 1) Normalisation (totale, jamais d'échec)
    let jetons_normalises = normaliser(jetons);

    // 2) Validation grammaticale
    if let Err(erreur) = valider(&jetons_normalises) {
        return Bilan::Echec(Echec {
            erreur,
            jetons_originaux: jetons.to_vec(),
            jetons_normalises,
        });
    }

    // 3) Postfixe (totale sur entrée validée)
    let expression_postfixe = vers_postfixe(&jetons_normalises);

    // 4) Évaluation + démarche
    match evaluer_postfixe(&expression_postfixe) {
        Ok((resultat, demarche)) => {
            let nb_operations = demarche.iter().filter(|e| e.est_operation()).count();

            Bilan::Reussite(Reussite {
                resultat,
                jetons_originaux: jetons.to_vec(),
                expression_infixe: jetons_normalises.join(" "),
                jetons_normalises,
                expression_postfixe,
                demarche,
                nb_operations,
            })
        }
        Err(erreur) => Bilan::Echec(Echec {
            erreur,
            jetons_originaux: jetons.to_vec(),
            jetons_normalises,
        }),
    }
}
