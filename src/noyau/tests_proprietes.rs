//! Tests de propriétés du pipeline complet.
//!
//! Couvre ce que la couche HTTP attend du noyau :
//! - complétude de la démarche (N empilements + M applications, en ordre)
//! - rejouabilité des instantanés de pile
//! - déterminisme bit-à-bit entre deux appels
//! - formes sérialisées réussite/échec

use super::demarche::Etape;
use super::eval::evaluer;
use super::jetons::normaliser;
use super::{Bilan, Reussite};

fn v(jetons: &[&str]) -> Vec<String> {
    jetons.iter().map(|j| j.to_string()).collect()
}

fn reussite(jetons: &[&str]) -> Reussite {
    match evaluer(&v(jetons)) {
        Bilan::Reussite(r) => r,
        Bilan::Echec(e) => panic!("evaluer({jetons:?}) a échoué: {}", e.erreur),
    }
}

/* ------------------------ Démarche ------------------------ */

#[test]
fn demarche_complete_et_comptee() {
    // 4 nombres, 3 opérateurs
    let r = reussite(&["2", "+", "3", "*", "4", "-", "5"]);

    let empilements = r.demarche.iter().filter(|e| !e.est_operation()).count();
    let applications = r.demarche.iter().filter(|e| e.est_operation()).count();

    assert_eq!(empilements, 4);
    assert_eq!(applications, 3);
    assert_eq!(r.nb_operations, 3);
    assert_eq!(r.demarche.len(), 7);
    assert_eq!(r.resultat, 9.0);
}

#[test]
fn demarche_ordre_postfixe() {
    // 2 + 3*4 : la multiplication s'applique avant l'addition
    let r = reussite(&["2", "+", "3", "*", "4"]);

    let operateurs: Vec<&str> = r
        .demarche
        .iter()
        .filter_map(|e| match e {
            Etape::AppliquerOperation { operateur, .. } => Some(operateur.as_str()),
            Etape::EmpilerNombre { .. } => None,
        })
        .collect();

    assert_eq!(operateurs, ["*", "+"]);
}

#[test]
fn demarche_instantanes_rejouables() {
    let r = reussite(&["8", "-", "3", "-", "2"]);

    // chaque instantané est l'instantané précédent + le pas appliqué
    let mut pile_attendue: Vec<f64> = Vec::new();
    for pas in &r.demarche {
        match pas {
            Etape::EmpilerNombre { valeur, pile, .. } => {
                pile_attendue.push(*valeur);
                assert_eq!(pile, &pile_attendue);
            }
            Etape::AppliquerOperation {
                operande_a,
                operande_b,
                resultat,
                pile,
                ..
            } => {
                let b = pile_attendue.pop().unwrap();
                let a = pile_attendue.pop().unwrap();
                assert_eq!((a, b), (*operande_a, *operande_b));
                pile_attendue.push(*resultat);
                assert_eq!(pile, &pile_attendue);
            }
        }
    }

    // l'instantané final est [resultat]
    assert_eq!(pile_attendue, vec![r.resultat]);
}

#[test]
fn demarche_rendu_lisible() {
    let r = reussite(&["2", "mas", "3"]);
    match &r.demarche[2] {
        Etape::AppliquerOperation { expression, .. } => {
            assert_eq!(expression, "2 + 3 = 5");
        }
        autre => panic!("troisième pas inattendu: {autre:?}"),
    }
}

/* ------------------------ Formes dérivées ------------------------ */

#[test]
fn expression_infixe_jointe_par_espaces() {
    let r = reussite(&["2", "mas", "3", "por", "4"]);
    assert_eq!(r.expression_infixe, "2 + 3 * 4");
    assert_eq!(r.expression_postfixe, v(&["2", "3", "4", "*", "+"]));
}

#[test]
fn jetons_originaux_conserves_tels_quels() {
    let r = reussite(&["2", " MAS ", "3"]);
    assert_eq!(r.jetons_originaux, v(&["2", " MAS ", "3"]));
    assert_eq!(r.jetons_normalises, v(&["2", "+", "3"]));
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn deux_appels_bit_a_bit_identiques() {
    let entree = v(&["7.25", "entre", "0.5", "menos", "3", "por", "2"]);
    let premier = evaluer(&entree);
    let second = evaluer(&entree);
    assert_eq!(premier, second);
}

#[test]
fn normalisation_idempotente_sur_le_pipeline() {
    let entree = v(&["2", "MAS", "3", "×", "4"]);
    let une_fois = normaliser(&entree);
    assert_eq!(normaliser(&une_fois), une_fois);

    // évaluer l'entrée brute ou l'entrée déjà normalisée : même noyau
    let brut = evaluer(&entree);
    let pre_normalise = evaluer(&une_fois);
    assert_eq!(brut.resultat(), pre_normalise.resultat());
    assert_eq!(brut.jetons_normalises(), pre_normalise.jetons_normalises());
}

/* ------------------------ Sérialisation bout-en-bout ------------------------ */

#[test]
fn json_reussite_contient_toutes_les_cles() {
    let bilan = evaluer(&v(&["2", "mas", "3"]));
    let json = serde_json::to_value(&bilan).unwrap();

    for cle in [
        "succes",
        "resultat",
        "jetons_originaux",
        "jetons_normalises",
        "expression_infixe",
        "expression_postfixe",
        "demarche",
        "nb_operations",
    ] {
        assert!(json.get(cle).is_some(), "clé manquante: {cle}");
    }
    assert_eq!(json["succes"], true);
    assert_eq!(json["demarche"][0]["action"], "empiler_nombre");
    assert_eq!(json["demarche"][2]["action"], "appliquer_operation");
}

#[test]
fn json_echec_mentionne_la_raison() {
    let bilan = evaluer(&v(&["4", "/", "0"]));
    let json = serde_json::to_value(&bilan).unwrap();

    assert_eq!(json["succes"], false);
    assert!(json["erreur"]
        .as_str()
        .unwrap()
        .contains("division par zéro"));
    assert!(json.get("resultat").is_none());
}
