//! Static periodic-table data used to label visualizations and seed the
//! parameter form.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub name: &'static str,
    pub symbol: &'static str,
}

pub const ELEMENTS: [Element; 20] = [
    Element { name: "Hydrogen", symbol: "H" },
    Element { name: "Helium", symbol: "He" },
    Element { name: "Lithium", symbol: "Li" },
    Element { name: "Beryllium", symbol: "Be" },
    Element { name: "Boron", symbol: "B" },
    Element { name: "Carbon", symbol: "C" },
    Element { name: "Nitrogen", symbol: "N" },
    Element { name: "Oxygen", symbol: "O" },
    Element { name: "Fluorine", symbol: "F" },
    Element { name: "Neon", symbol: "Ne" },
    Element { name: "Sodium", symbol: "Na" },
    Element { name: "Magnesium", symbol: "Mg" },
    Element { name: "Aluminum", symbol: "Al" },
    Element { name: "Silicon", symbol: "Si" },
    Element { name: "Phosphorus", symbol: "P" },
    Element { name: "Sulfur", symbol: "S" },
    Element { name: "Chlorine", symbol: "Cl" },
    Element { name: "Argon", symbol: "Ar" },
    Element { name: "Potassium", symbol: "K" },
    Element { name: "Calcium", symbol: "Ca" },
];

pub fn element_for_protons(protons: u32) -> Option<&'static Element> {
    ELEMENTS.get((protons as usize).saturating_sub(1))
}

pub fn name_for_protons(protons: u32) -> &'static str {
    match element_for_protons(protons) {
        Some(element) if protons > 0 => element.name,
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_elements() {
        assert_eq!(name_for_protons(1), "Hydrogen");
        assert_eq!(name_for_protons(6), "Carbon");
        assert_eq!(name_for_protons(20), "Calcium");
    }

    #[test]
    fn test_out_of_range_is_unknown() {
        assert_eq!(name_for_protons(0), "Unknown");
        assert_eq!(name_for_protons(21), "Unknown");
        assert_eq!(name_for_protons(118), "Unknown");
    }
}
