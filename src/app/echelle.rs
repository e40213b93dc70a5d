// src/app/echelle.rs
//
// Texte auto-ajusté : l’affichage rétrécit pour tenir dans la largeur disponible.
// Mesure après rendu -> nouveau facteur -> un repaint de plus ; stable dès que le facteur ne change plus.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EchelleAuto {
    echelle: f32,
}

impl Default for EchelleAuto {
    fn default() -> Self {
        Self { echelle: 1.0 }
    }
}

impl EchelleAuto {
    pub fn echelle(&self) -> f32 {
        self.echelle
    }

    /// Ajuste le facteur à partir des largeurs mesurées (texte non mis à l’échelle).
    ///
    /// - ratio = disponible / naturelle
    /// - ratio == facteur courant : rien
    /// - ratio < 1 : facteur = ratio
    /// - sinon, si le facteur était < 1 : retour à 1
    ///
    /// Renvoie true si le facteur a changé (il faut redessiner).
    pub fn ajuster(&mut self, largeur_disponible: f32, largeur_naturelle: f32) -> bool {
        if !(largeur_naturelle > 0.0) || !largeur_disponible.is_finite() {
            return false;
        }

        let ratio = largeur_disponible / largeur_naturelle;
        if ratio == self.echelle {
            return false;
        }

        if ratio < 1.0 {
            self.echelle = ratio;
            true
        } else if self.echelle < 1.0 {
            self.echelle = 1.0;
            true
        } else {
            false
        }
    }
}
