// src/noyau/format.rs

/// Arrondi de lecture : 12 décimales.
///
/// On ajoute EPSILON avant d'arrondir pour absorber le bruit binaire
/// (0.1 + 0.2 = 0.30000000000000004 doit se lire 0.3).
pub fn arrondir_lecture(x: f64) -> f64 {
    ((x + f64::EPSILON) * 1e12).round() / 1e12
}

/// Forme décimale canonique pour ré-affichage dans la saisie.
///
/// Le Display de f64 donne déjà la forme courte exacte ("4", "0.3", "2.5"),
/// ce qui permet d'enchaîner un calcul sur le résultat.
pub fn format_resultat(x: f64) -> String {
    // -0.0 s'affiche "-0" : on le normalise
    let x = if x == 0.0 { 0.0 } else { x };
    format!("{x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrondi_masque_le_bruit_binaire() {
        assert_eq!(arrondir_lecture(0.1 + 0.2), 0.3);
        assert_eq!(arrondir_lecture(4.0), 4.0);
        assert_eq!(arrondir_lecture(2.5), 2.5);
    }

    #[test]
    fn forme_canonique() {
        assert_eq!(format_resultat(4.0), "4");
        assert_eq!(format_resultat(2.5), "2.5");
        assert_eq!(format_resultat(0.3), "0.3");
        assert_eq!(format_resultat(-0.0), "0");
    }

    #[test]
    fn resultat_reinjecte_retokenisable() {
        // la forme affichée doit repasser par le tokenizer telle quelle
        let s = format_resultat(arrondir_lecture(10.0 / 4.0));
        assert_eq!(s, "2.5");
        assert!(s.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-'));
    }
}
