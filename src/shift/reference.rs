use serde::Deserialize;
use std::collections::{HashMap, HashSet};

/// One experimental resonance: a shift in ppm assigned to the atom indices
/// whose predicted shifts it should be compared against.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReferenceGroup {
    pub shift: f64,
    pub atoms: Vec<usize>,
}

/// Atom indices belonging to the drug molecule; everything else in the
/// reference counts as polymer matrix.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DrugAtoms {
    #[serde(default)]
    pub carbon: Vec<usize>,
    #[serde(default)]
    pub hydrogen: Vec<usize>,
}

/// Experimental chemical-shift reference for one dataset, loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub carbon: Vec<ReferenceGroup>,
    #[serde(default)]
    pub hydrogen: Vec<ReferenceGroup>,
    #[serde(default)]
    pub drug: DrugAtoms,
}

impl Reference {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Flattened atom-index → experimental-shift map for ¹³C. Groups are
    /// applied in declaration order; an atom listed twice keeps the later
    /// assignment.
    pub fn carbon_map(&self) -> HashMap<usize, f64> {
        flatten(&self.carbon)
    }

    pub fn hydrogen_map(&self) -> HashMap<usize, f64> {
        flatten(&self.hydrogen)
    }

    /// Union of the ¹³C and ¹H maps; atom indices are disjoint between the
    /// two nuclei, so the union is well defined.
    pub fn combined_map(&self) -> HashMap<usize, f64> {
        let mut map = self.carbon_map();
        map.extend(self.hydrogen_map());
        map
    }

    pub fn drug_carbon(&self) -> HashSet<usize> {
        self.drug.carbon.iter().copied().collect()
    }

    pub fn drug_hydrogen(&self) -> HashSet<usize> {
        self.drug.hydrogen.iter().copied().collect()
    }

    pub fn drug_all(&self) -> HashSet<usize> {
        let mut set = self.drug_carbon();
        set.extend(self.drug_hydrogen());
        set
    }
}

fn flatten(groups: &[ReferenceGroup]) -> HashMap<usize, f64> {
    let mut map = HashMap::new();
    for group in groups {
        for &atom in &group.atoms {
            map.insert(atom, group.shift);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = r#"
[[carbon]]
shift = 58.0
atoms = [34, 36, 38]

[[carbon]]
shift = 24.1
atoms = [232]

[[hydrogen]]
shift = 8.5
atoms = [219, 236]

[drug]
carbon = [232]
hydrogen = [219, 236]
"#;

    #[test]
    fn parses_and_flattens() {
        let reference = Reference::from_toml_str(REFERENCE).unwrap();
        let carbon = reference.carbon_map();
        assert_eq!(carbon.len(), 4);
        assert_eq!(carbon[&34], 58.0);
        assert_eq!(carbon[&232], 24.1);
        assert_eq!(reference.hydrogen_map()[&219], 8.5);
    }

    #[test]
    fn later_duplicate_assignment_wins() {
        let reference = Reference::from_toml_str(
            "[[carbon]]\nshift = 1.0\natoms = [5]\n[[carbon]]\nshift = 2.0\natoms = [5]\n",
        )
        .unwrap();
        assert_eq!(reference.carbon_map()[&5], 2.0);
    }

    #[test]
    fn drug_subsets_and_union() {
        let reference = Reference::from_toml_str(REFERENCE).unwrap();
        assert_eq!(reference.drug_carbon().len(), 1);
        assert_eq!(reference.drug_hydrogen().len(), 2);
        let all = reference.drug_all();
        assert!(all.contains(&232) && all.contains(&219) && all.contains(&236));
    }

    #[test]
    fn combined_map_unions_both_nuclei() {
        let reference = Reference::from_toml_str(REFERENCE).unwrap();
        let combined = reference.combined_map();
        assert_eq!(combined.len(), 6);
        assert_eq!(combined[&219], 8.5);
        assert_eq!(combined[&34], 58.0);
    }
}
