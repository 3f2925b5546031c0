use dftd3c6::{D3Calculator, DispersionCoefficients, get_default_reference_table};

pub struct Molecule<'a> {
    pub name: &'a str,
    pub elements: Vec<&'a str>,
    pub coordinates: Vec<[f64; 3]>,
}

impl Molecule<'_> {
    pub fn permuted(&self, order: &[usize]) -> Self {
        Molecule {
            name: self.name,
            elements: order.iter().map(|&i| self.elements[i]).collect(),
            coordinates: order.iter().map(|&i| self.coordinates[i]).collect(),
        }
    }
}

pub fn run_default(molecule: &Molecule) -> DispersionCoefficients {
    let table = get_default_reference_table().expect("Embedded reference table failed to load");
    D3Calculator::new(table)
        .run(&molecule.elements, &molecule.coordinates)
        .expect("Calculation failed")
}

pub fn hydrogen_molecule() -> Molecule<'static> {
    Molecule {
        name: "H2",
        elements: vec!["H", "H"],
        coordinates: vec![[0.0, 0.0, 0.0], [0.0, 0.0, 0.74]],
    }
}

pub fn water() -> Molecule<'static> {
    Molecule {
        name: "H2O",
        elements: vec!["O", "H", "H"],
        coordinates: vec![[0.0, 0.0, 0.0], [0.757, 0.586, 0.0], [-0.757, 0.586, 0.0]],
    }
}

pub fn methane() -> Molecule<'static> {
    let a = 1.09 / 3.0f64.sqrt();
    Molecule {
        name: "CH4",
        elements: vec!["C", "H", "H", "H", "H"],
        coordinates: vec![
            [0.0, 0.0, 0.0],
            [a, a, a],
            [-a, -a, a],
            [-a, a, -a],
            [a, -a, -a],
        ],
    }
}

pub fn benzene() -> Molecule<'static> {
    let mut elements = Vec::new();
    let mut coordinates = Vec::new();
    for (symbol, radius) in [("C", 1.397), ("H", 2.481)] {
        for k in 0..6 {
            let theta = (60.0 * k as f64).to_radians();
            elements.push(symbol);
            coordinates.push([radius * theta.cos(), radius * theta.sin(), 0.0]);
        }
    }
    Molecule {
        name: "C6H6",
        elements,
        coordinates,
    }
}

/// Checks each atom's coordination number and C6 against a window, printing a summary table.
pub fn check_windows(molecule: &Molecule, windows: &[(usize, (f64, f64), (f64, f64))]) {
    let result = run_default(molecule);

    println!("\nMolecule: {}", molecule.name);
    println!("{:-<60}", "");
    println!("{:<8} | {:<8} | {:<12} | {:<12}", "Atom", "Element", "CN", "C6");

    for &(index, (cn_lo, cn_hi), (c6_lo, c6_hi)) in windows {
        let cn = result.coordination_numbers[index];
        let c6 = result.c6_coefficients[index];
        println!(
            "{:<8} | {:<8} | {:<12.4} | {:<12.4}",
            index, molecule.elements[index], cn, c6
        );
        assert!(
            cn > cn_lo && cn < cn_hi,
            "{} atom {}: CN {:.4} outside ({}, {})",
            molecule.name,
            index,
            cn,
            cn_lo,
            cn_hi
        );
        assert!(
            c6 > c6_lo && c6 < c6_hi,
            "{} atom {}: C6 {:.4} outside ({}, {})",
            molecule.name,
            index,
            c6,
            c6_lo,
            c6_hi
        );
    }
    println!("{:-<60}\n", "");
}
