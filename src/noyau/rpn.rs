// src/noyau/rpn.rs
//
// Shunting-yard -> postfixe, sur jetons String normalisés.
//
// Règles:
// - dépile tant que le sommet n'est pas '(' et que sa précédence est
//   >= à celle de l'opérateur courant (associativité GAUCHE : `8-3-2`
//   doit donner `8 3 - 2 -`, pas `8 3 2 - -`)
// - '(' empilée telle quelle; ')' dépile jusqu'à la '(' correspondante
//   et la jette; une ')' orpheline s'arrête en silence quand la pile
//   est vide
//
// Totale sur une entrée validée : ne retourne jamais d'erreur. Le
// comportement sur une entrée non validée n'est pas spécifié (les
// appelants passent par `valider` d'abord).

use super::jetons::{est_nombre, precedence};

/// Convertit une suite infixe (validée, normalisée) en postfixe.
///
/// Exemple:
///   entrée : ["2", "+", "3", "*", "4"]
///   sortie : ["2", "3", "4", "*", "+"]
pub fn vers_postfixe(jetons: &[String]) -> Vec<String> {
    let mut sortie: Vec<String> = Vec::new();
    let mut ops: Vec<String> = Vec::new();

    for jeton in jetons {
        if est_nombre(jeton) {
            sortie.push(jeton.clone());
        } else if let Some(p_jeton) = precedence(jeton) {
            while let Some(haut) = ops.last() {
                if haut == "(" {
                    break;
                }
                // .unwrap_or(0) : une '(' est déjà exclue, tout autre
                // sommet est un opérateur canonique
                if precedence(haut).unwrap_or(0) >= p_jeton {
                    let haut = ops.pop().unwrap();
                    sortie.push(haut);
                } else {
                    break;
                }
            }
            ops.push(jeton.clone());
        } else if jeton == "(" {
            ops.push(jeton.clone());
        } else if jeton == ")" {
            // dépile jusqu'à '(' ; pile vide => on s'arrête sans bruit
            while let Some(haut) = ops.pop() {
                if haut == "(" {
                    break;
                }
                sortie.push(haut);
            }
        }
        // tout autre jeton est ignoré (entrée déjà validée en amont)
    }

    // vide la pile restante, dans l'ordre de dépilement
    while let Some(op) = ops.pop() {
        sortie.push(op);
    }

    sortie
}
