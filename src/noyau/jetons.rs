// src/noyau/jetons.rs
//
// Tables de symboles + prédicats + normalisation.
//
// Les jetons restent des String de bout en bout : la chaîne amont prédit
// du texte (« 2 », « mas », « 3 ») et la classification se fait par
// prédicat (est_nombre / est_operateur), jamais par position figée.

/// Alias → opérateur canonique.
///
/// Couvre les noms prédits par les classifieurs (vocabulaire espagnol des
/// signes) et les glyphes Unicode alternatifs. Table figée à la
/// compilation, jamais mutée.
pub fn canonique(jeton: &str) -> Option<&'static str> {
    match jeton {
        "mas" | "suma" => Some("+"),
        "menos" | "resta" => Some("-"),
        "por" | "multiplicacion" | "×" => Some("*"),
        "entre" | "division" | "÷" => Some("/"),
        _ => None,
    }
}

/// Opérateur canonique → précédence (plus grand = lie plus fort).
///
/// `+` et `-` partagent le niveau 1, `*` et `/` le niveau 2.
pub fn precedence(jeton: &str) -> Option<i32> {
    match jeton {
        "+" | "-" => Some(1),
        "*" | "/" => Some(2),
        _ => None,
    }
}

/// Vrai si le jeton se lit comme un nombre réel (négatifs et décimaux
/// compris).
pub fn est_nombre(jeton: &str) -> bool {
    jeton.parse::<f64>().is_ok()
}

/// Vrai si le jeton est un opérateur canonique (présent dans la table de
/// précédence).
pub fn est_operateur(jeton: &str) -> bool {
    precedence(jeton).is_some()
}

/// Normalise une suite de jetons bruts : même longueur, même ordre.
///
/// Pour chaque jeton :
/// - espaces de bord retirés;
/// - la forme en minuscules sert UNIQUEMENT à la recherche d'alias
///   (les chiffres sont insensibles à la casse, un nombre n'est donc
///   jamais corrompu);
/// - alias reconnu => symbole canonique, sinon le jeton passe tel quel
///   (nombres, opérateurs déjà canoniques).
///
/// Totale et pure : aucune entrée ne la fait échouer. Idempotente.
pub fn normaliser(jetons: &[String]) -> Vec<String> {
    jetons
        .iter()
        .map(|jeton| {
            let propre = jeton.trim();
            let minuscules = propre.to_lowercase();
            match canonique(&minuscules) {
                Some(op) => op.to_string(),
                None => propre.to_string(),
            }
        })
        .collect()
}
