use super::config::{CyclicRule, SubstituentEntry, Thresholds};
use super::error::Error;
use super::geometry::{angle_deg, distance};
use crate::model::snapshot::Snapshot;

/// Scans for acceptors of a fixed donor pair: every O/N atom other than the
/// two site atoms whose distance to the donor hydrogen and donor-H-acceptor
/// angle pass the thresholds. Partner labels come back in structure order,
/// each candidate visited once.
pub fn donor_partners(
    snapshot: &Snapshot,
    heavy: usize,
    hydrogen: usize,
    thresholds: &Thresholds,
) -> Result<Vec<String>, Error> {
    check_site(snapshot, "donor heavy-atom", heavy)?;
    check_site(snapshot, "donor hydrogen", hydrogen)?;

    let heavy_pos = snapshot.position(heavy);
    let hydrogen_pos = snapshot.position(hydrogen);

    let mut partners = Vec::new();
    for (j, atom) in snapshot.atoms.iter().enumerate() {
        if j == heavy || j == hydrogen || !atom.element.can_hbond() {
            continue;
        }
        if distance(hydrogen_pos, atom.position) > thresholds.max_acceptor_distance {
            continue;
        }
        let angle = angle_deg(heavy_pos, hydrogen_pos, atom.position)
            .map_err(|source| degenerate(snapshot, hydrogen, source))?;
        if angle >= thresholds.min_donor_angle {
            partners.push(snapshot.label(j));
        }
    }
    Ok(partners)
}

/// Scans for donors of a fixed acceptor atom. The acceptor has no
/// pre-declared hydrogen, so every hydrogen in the snapshot is a candidate:
/// each O/N atom within the covalent cutoff of a hydrogen is treated as that
/// hydrogen's parent and the geometric test is evaluated per (hydrogen,
/// parent) pair. Chemically there is one parent per hydrogen, but zero or
/// several candidates are tolerated and each is tested independently.
pub fn acceptor_partners(
    snapshot: &Snapshot,
    acceptor: usize,
    thresholds: &Thresholds,
) -> Result<Vec<String>, Error> {
    check_site(snapshot, "acceptor", acceptor)?;

    let acceptor_pos = snapshot.position(acceptor);

    let mut partners = Vec::new();
    for (i, candidate) in snapshot.atoms.iter().enumerate() {
        if !candidate.element.is_hydrogen() {
            continue;
        }
        for (j, parent) in snapshot.atoms.iter().enumerate() {
            if j == i || !parent.element.can_hbond() {
                continue;
            }
            if distance(parent.position, candidate.position) >= thresholds.covalent_cutoff {
                continue;
            }
            if distance(candidate.position, acceptor_pos) > thresholds.max_acceptor_distance {
                continue;
            }
            let angle = angle_deg(parent.position, candidate.position, acceptor_pos)
                .map_err(|source| degenerate(snapshot, i, source))?;
            if angle >= thresholds.min_donor_angle {
                partners.push(snapshot.label(j));
            }
        }
    }
    Ok(partners)
}

/// Maps the amide-donor partner list onto substituent labels. Entries are
/// tried in declaration order; an entry matches when any of its target
/// labels occurs among the partners. Multiple matches are comma-joined, no
/// match yields the empty string.
pub fn classify_substituent(partners: &[String], entries: &[SubstituentEntry]) -> String {
    entries
        .iter()
        .filter(|entry| entry.targets.iter().any(|t| partners.iter().any(|p| p == t)))
        .map(|entry| entry.label.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// True iff any configured ring-closing pair is simultaneously present in
/// the two partner lists. An empty rule set never flags.
pub fn detect_cyclic_hbond(
    donor_partners: &[String],
    acceptor_partners: &[String],
    rules: &[CyclicRule],
) -> bool {
    rules.iter().any(|rule| {
        donor_partners.iter().any(|p| *p == rule.donor_partner)
            && acceptor_partners.iter().any(|p| *p == rule.acceptor_partner)
    })
}

fn check_site(snapshot: &Snapshot, site: &'static str, idx: usize) -> Result<(), Error> {
    if idx >= snapshot.atom_count() {
        return Err(Error::site_out_of_range(site, idx + 1, snapshot.atom_count()));
    }
    Ok(())
}

fn degenerate(snapshot: &Snapshot, vertex: usize, source: super::geometry::DegenerateAngle) -> Error {
    Error::DegenerateGeometry {
        vertex: snapshot.label(vertex),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Atom, Element};

    fn atom(element: Element, x: f64, y: f64, z: f64) -> Atom {
        Atom::new(element, [x, y, z])
    }

    fn entry(label: &str, targets: &[&str]) -> SubstituentEntry {
        SubstituentEntry {
            label: label.to_string(),
            targets: targets.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn rule(donor: &str, acceptor: &str) -> CyclicRule {
        CyclicRule {
            donor_partner: donor.to_string(),
            acceptor_partner: acceptor.to_string(),
        }
    }

    fn labels(partners: &[&str]) -> Vec<String> {
        partners.iter().map(|p| p.to_string()).collect()
    }

    /// N at the origin, its hydrogen 1.0 Å along x, an acceptor oxygen a
    /// further 2.0 Å along x (so 180° at the hydrogen), plus bystanders.
    fn linear_donor_snapshot() -> Snapshot {
        Snapshot::new(vec![
            atom(Element::N, 0.0, 0.0, 0.0),
            atom(Element::H, 1.0, 0.0, 0.0),
            atom(Element::O, 3.0, 0.0, 0.0),
            atom(Element::C, 0.0, 5.0, 0.0),
            atom(Element::H, 0.0, 6.0, 0.0),
        ])
    }

    #[test]
    fn fixed_donor_finds_the_linear_acceptor() {
        let snapshot = linear_donor_snapshot();
        let partners = donor_partners(&snapshot, 0, 1, &Thresholds::default()).unwrap();
        assert_eq!(partners, vec!["O3".to_string()]);
    }

    #[test]
    fn fixed_donor_excludes_site_atoms_and_non_hbond_elements() {
        // A second oxygen right on top of the donor pair must not match via
        // the site-atom exclusion, and carbon is never a partner.
        let snapshot = Snapshot::new(vec![
            atom(Element::N, 0.0, 0.0, 0.0),
            atom(Element::H, 1.0, 0.0, 0.0),
            atom(Element::C, 3.0, 0.0, 0.0),
        ]);
        let partners = donor_partners(&snapshot, 0, 1, &Thresholds::default()).unwrap();
        assert!(partners.is_empty());
    }

    #[test]
    fn raising_the_angle_threshold_never_adds_partners() {
        let snapshot = Snapshot::new(vec![
            atom(Element::N, 0.0, 0.0, 0.0),
            atom(Element::H, 1.0, 0.0, 0.0),
            atom(Element::O, 3.0, 0.0, 0.0),
            atom(Element::O, 2.0, 1.4, 0.0),
            atom(Element::N, 1.8, -1.2, 0.5),
        ]);

        let mut previous = usize::MAX;
        for min_angle in [90.0, 110.0, 130.0, 150.0, 170.0] {
            let thresholds = Thresholds {
                min_donor_angle: min_angle,
                ..Thresholds::default()
            };
            let count = donor_partners(&snapshot, 0, 1, &thresholds).unwrap().len();
            assert!(count <= previous);
            previous = count;
        }
    }

    #[test]
    fn acceptor_site_collects_bonded_donors() {
        // O-H pointing straight at the acceptor: H 0.97 Å from its parent
        // oxygen, acceptor 1.8 Å beyond the hydrogen.
        let snapshot = Snapshot::new(vec![
            atom(Element::O, 0.0, 0.0, 0.0),
            atom(Element::H, 0.97, 0.0, 0.0),
            atom(Element::O, 2.77, 0.0, 0.0),
        ]);
        let partners = acceptor_partners(&snapshot, 2, &Thresholds::default()).unwrap();
        assert_eq!(partners, vec!["O1".to_string()]);
    }

    #[test]
    fn unbonded_hydrogen_yields_no_acceptor_partner() {
        // The hydrogen sits 3.0 Å from every heavy atom, far outside the
        // covalent cutoff, so no parent is assigned.
        let snapshot = Snapshot::new(vec![
            atom(Element::O, 3.0, 0.0, 0.0),
            atom(Element::H, 0.0, 0.0, 0.0),
            atom(Element::O, -3.0, 0.0, 0.0),
        ]);
        let partners = acceptor_partners(&snapshot, 2, &Thresholds::default()).unwrap();
        assert!(partners.is_empty());
    }

    #[test]
    fn substituent_matches_in_declaration_order() {
        let entries = vec![
            entry("M", &["O23", "O35"]),
            entry("S", &["O28", "O32"]),
            entry("A", &["O42"]),
        ];
        let partners = labels(&["O32", "O35"]);

        assert_eq!(classify_substituent(&partners, &entries), "M,S");
        // idempotent on identical input
        assert_eq!(classify_substituent(&partners, &entries), "M,S");
    }

    #[test]
    fn substituent_without_match_is_empty() {
        let entries = vec![entry("M", &["O23"])];
        assert_eq!(classify_substituent(&labels(&["O99"]), &entries), "");
        assert_eq!(classify_substituent(&[], &entries), "");
    }

    #[test]
    fn cyclic_requires_both_sides_of_one_rule() {
        let rules = vec![rule("O32", "H81")];
        assert!(detect_cyclic_hbond(
            &labels(&["O32"]),
            &labels(&["H81"]),
            &rules
        ));
        assert!(!detect_cyclic_hbond(
            &labels(&["O32"]),
            &labels(&["H82"]),
            &rules
        ));
    }

    #[test]
    fn cyclic_is_an_or_over_rules_and_false_when_empty() {
        let rules = vec![rule("O32", "H81"), rule("O141", "H190")];
        assert!(detect_cyclic_hbond(
            &labels(&["O141"]),
            &labels(&["H190"]),
            &rules
        ));
        assert!(!detect_cyclic_hbond(
            &labels(&["O141"]),
            &labels(&["H190"]),
            &[]
        ));
    }

    #[test]
    fn out_of_range_site_fails_loudly() {
        let snapshot = linear_donor_snapshot();
        let err = donor_partners(&snapshot, 0, 99, &Thresholds::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::SiteOutOfRange {
                site: "donor hydrogen",
                index: 100,
                atom_count: 5,
            }
        ));
    }

    #[test]
    fn coincident_donor_atoms_report_degenerate_geometry() {
        let snapshot = Snapshot::new(vec![
            atom(Element::N, 1.0, 0.0, 0.0),
            atom(Element::H, 1.0, 0.0, 0.0),
            atom(Element::O, 2.0, 0.0, 0.0),
        ]);
        let err = donor_partners(&snapshot, 0, 1, &Thresholds::default()).unwrap_err();
        assert!(matches!(err, Error::DegenerateGeometry { .. }));
    }
}
