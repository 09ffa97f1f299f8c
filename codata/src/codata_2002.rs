//! CODATA 2002 recommended values of the fundamental physical constants
//! (partial table).
//!
//! Source: P. J. Mohr and B. N. Taylor, "CODATA recommended values of the
//! fundamental physical constants: 2002", Rev. Mod. Phys. 77, 1 (2005).
//! <https://physics.nist.gov/cuu/Constants/>
//!
//! Kept alongside the 2006 table so that code pinned to the older revision
//! keeps its numbers. Names follow the 2002 publication, including its
//! spelling "hyperpolarizablity".

codata_core::codata_table! {
    revision: 2002;

    Wien_displacement_law_constant: Narrow {
        name: "Wien displacement law constant",
        value: 0.0028977685,
        uncertainty: 5.1e-09,
        unit: "m K",
    }

    atomic_unit_of_1st_hyperpolarizablity: Wide {
        name: "atomic unit of 1st hyperpolarizablity",
        value: 3.20636151e-53,
        uncertainty: 2.8e-60,
        unit: "C^3 m^3 J^-2",
    }

    atomic_unit_of_2nd_hyperpolarizablity: Wide {
        name: "atomic unit of 2nd hyperpolarizablity",
        value: 6.2353808e-65,
        uncertainty: 1.1e-71,
        unit: "C^4 m^4 J^-3",
    }

    atomic_unit_of_electric_dipole_moment: Narrow {
        name: "atomic unit of electric dipole moment",
        value: 8.47835309e-30,
        uncertainty: 7.3e-37,
        unit: "C m",
    }

    atomic_unit_of_electric_polarizablity: Narrow {
        name: "atomic unit of electric polarizablity",
        value: 1.648777274e-41,
        uncertainty: 1.6e-49,
        unit: "C^2 m^2 J^-1",
    }

    atomic_unit_of_electric_quadrupole_moment: Narrow {
        name: "atomic unit of electric quadrupole moment",
        value: 4.48655124e-40,
        uncertainty: 3.9e-47,
        unit: "C m^2",
    }

    atomic_unit_of_magn_dipole_moment: Narrow {
        name: "atomic unit of magn. dipole moment",
        value: 1.8548019e-23,
        uncertainty: 1.6e-30,
        unit: "J T^-1",
    }

    atomic_unit_of_magn_flux_density: Narrow {
        name: "atomic unit of magn. flux density",
        value: 235051.742,
        uncertainty: 0.02,
        unit: "T",
    }

    deuteron_magn_moment: Narrow {
        name: "deuteron magn. moment",
        value: 4.33073482e-27,
        uncertainty: 3.8e-34,
        unit: "J T^-1",
    }

    deuteron_magn_moment_to_Bohr_magneton_ratio: Narrow {
        name: "deuteron magn. moment to Bohr magneton ratio",
        value: 0.0004669754567,
        uncertainty: 5e-12,
        unit: "",
    }

    deuteron_magn_moment_to_nuclear_magneton_ratio: Narrow {
        name: "deuteron magn. moment to nuclear magneton ratio",
        value: 0.8574382329,
        uncertainty: 9.2e-09,
        unit: "",
    }

    deuteron_electron_magn_moment_ratio: Narrow {
        name: "deuteron-electron magn. moment ratio",
        value: -0.0004664345548,
        uncertainty: 5e-12,
        unit: "",
    }

    deuteron_proton_magn_moment_ratio: Narrow {
        name: "deuteron-proton magn. moment ratio",
        value: 0.3070122084,
        uncertainty: 4.5e-09,
        unit: "",
    }

    deuteron_neutron_magn_moment_ratio: Narrow {
        name: "deuteron-neutron magn. moment ratio",
        value: -0.44820652,
        uncertainty: 1.1e-07,
        unit: "",
    }

    electron_gyromagn_ratio: Narrow {
        name: "electron gyromagn. ratio",
        value: 176085974000.0,
        uncertainty: 15000.0,
        unit: "s^-1 T^-1",
    }

    electron_gyromagn_ratio_over_2_pi: Narrow {
        name: "electron gyromagn. ratio over 2 pi",
        value: 28024.9532,
        uncertainty: 0.0024,
        unit: "MHz T^-1",
    }

    electron_magn_moment: Narrow {
        name: "electron magn. moment",
        value: -9.28476412e-24,
        uncertainty: 8e-31,
        unit: "J T^-1",
    }

    electron_magn_moment_to_Bohr_magneton_ratio: Narrow {
        name: "electron magn. moment to Bohr magneton ratio",
        value: -1.0011596521859,
        uncertainty: 3.8e-12,
        unit: "",
    }

    electron_magn_moment_to_nuclear_magneton_ratio: Narrow {
        name: "electron magn. moment to nuclear magneton ratio",
        value: -1838.28197107,
        uncertainty: 8.5e-07,
        unit: "",
    }

    electron_magn_moment_anomaly: Narrow {
        name: "electron magn. moment anomaly",
        value: 0.0011596521859,
        uncertainty: 3.8e-12,
        unit: "",
    }

    electron_to_shielded_proton_magn_moment_ratio: Narrow {
        name: "electron to shielded proton magn. moment ratio",
        value: -658.2275956,
        uncertainty: 7.1e-06,
        unit: "",
    }

    electron_to_shielded_helion_magn_moment_ratio: Narrow {
        name: "electron to shielded helion magn. moment ratio",
        value: 864.058255,
        uncertainty: 1e-05,
        unit: "",
    }

    electron_deuteron_magn_moment_ratio: Narrow {
        name: "electron-deuteron magn. moment ratio",
        value: -2143.923493,
        uncertainty: 2.3e-05,
        unit: "",
    }

    electron_muon_magn_moment_ratio: Narrow {
        name: "electron-muon magn. moment ratio",
        value: 206.7669894,
        uncertainty: 5.4e-06,
        unit: "",
    }

    electron_neutron_magn_moment_ratio: Narrow {
        name: "electron-neutron magn. moment ratio",
        value: 960.9205,
        uncertainty: 0.00023,
        unit: "",
    }

    electron_proton_magn_moment_ratio: Narrow {
        name: "electron-proton magn. moment ratio",
        value: -658.2106862,
        uncertainty: 6.6e-06,
        unit: "",
    }

    magn_constant: Narrow {
        name: "magn. constant",
        value: 1.2566370614e-06,
        uncertainty: 0.0,
        unit: "N A^-2",
    }

    magn_flux_quantum: Narrow {
        name: "magn. flux quantum",
        value: 2.06783372e-15,
        uncertainty: 1.8e-22,
        unit: "Wb",
    }

    muon_magn_moment: Narrow {
        name: "muon magn. moment",
        value: -4.49044799e-26,
        uncertainty: 4e-33,
        unit: "J T^-1",
    }

    muon_magn_moment_to_Bohr_magneton_ratio: Narrow {
        name: "muon magn. moment to Bohr magneton ratio",
        value: -0.00484197045,
        uncertainty: 1.3e-10,
        unit: "",
    }

    muon_magn_moment_to_nuclear_magneton_ratio: Narrow {
        name: "muon magn. moment to nuclear magneton ratio",
        value: -8.89059698,
        uncertainty: 2.3e-07,
        unit: "",
    }

    muon_proton_magn_moment_ratio: Narrow {
        name: "muon-proton magn. moment ratio",
        value: -3.183345118,
        uncertainty: 8.9e-08,
        unit: "",
    }

    neutron_gyromagn_ratio: Narrow {
        name: "neutron gyromagn. ratio",
        value: 183247183.0,
        uncertainty: 46.0,
        unit: "s^-1 T^-1",
    }

    neutron_gyromagn_ratio_over_2_pi: Narrow {
        name: "neutron gyromagn. ratio over 2 pi",
        value: 29.164695,
        uncertainty: 7.3e-06,
        unit: "MHz T^-1",
    }

    neutron_magn_moment: Narrow {
        name: "neutron magn. moment",
        value: -9.6623645e-27,
        uncertainty: 2.4e-33,
        unit: "J T^-1",
    }

    neutron_magn_moment_to_Bohr_magneton_ratio: Narrow {
        name: "neutron magn. moment to Bohr magneton ratio",
        value: -0.00104187563,
        uncertainty: 2.5e-10,
        unit: "",
    }

    neutron_magn_moment_to_nuclear_magneton_ratio: Narrow {
        name: "neutron magn. moment to nuclear magneton ratio",
        value: -1.91304273,
        uncertainty: 4.5e-07,
        unit: "",
    }

    neutron_to_shielded_proton_magn_moment_ratio: Narrow {
        name: "neutron to shielded proton magn. moment ratio",
        value: -0.68499694,
        uncertainty: 1.6e-07,
        unit: "",
    }

    neutron_electron_magn_moment_ratio: Narrow {
        name: "neutron-electron magn. moment ratio",
        value: 0.00104066882,
        uncertainty: 2.5e-10,
        unit: "",
    }

    neutron_proton_magn_moment_ratio: Narrow {
        name: "neutron-proton magn. moment ratio",
        value: -0.68497934,
        uncertainty: 1.6e-07,
        unit: "",
    }

    proton_gyromagn_ratio: Narrow {
        name: "proton gyromagn. ratio",
        value: 267522205.0,
        uncertainty: 23.0,
        unit: "s^-1 T^-1",
    }

    proton_gyromagn_ratio_over_2_pi: Narrow {
        name: "proton gyromagn. ratio over 2 pi",
        value: 42.5774813,
        uncertainty: 3.7e-06,
        unit: "MHz T^-1",
    }

    proton_magn_moment: Narrow {
        name: "proton magn. moment",
        value: 1.41060671e-26,
        uncertainty: 1.2e-33,
        unit: "J T^-1",
    }

    proton_magn_moment_to_Bohr_magneton_ratio: Narrow {
        name: "proton magn. moment to Bohr magneton ratio",
        value: 0.001521032206,
        uncertainty: 1.5e-11,
        unit: "",
    }

    proton_magn_moment_to_nuclear_magneton_ratio: Narrow {
        name: "proton magn. moment to nuclear magneton ratio",
        value: 2.792847351,
        uncertainty: 2.8e-08,
        unit: "",
    }

    proton_magn_shielding_correction: Narrow {
        name: "proton magn. shielding correction",
        value: 2.5689e-05,
        uncertainty: 1.5e-08,
        unit: "",
    }

    proton_neutron_magn_moment_ratio: Narrow {
        name: "proton-neutron magn. moment ratio",
        value: -1.45989805,
        uncertainty: 3.4e-07,
        unit: "",
    }

    shielded_helion_gyromagn_ratio: Narrow {
        name: "shielded helion gyromagn. ratio",
        value: 203789470.0,
        uncertainty: 18.0,
        unit: "s^-1 T^-1",
    }

    shielded_helion_gyromagn_ratio_over_2_pi: Narrow {
        name: "shielded helion gyromagn. ratio over 2 pi",
        value: 32.4341015,
        uncertainty: 2.8e-06,
        unit: "MHz T^-1",
    }

    shielded_helion_magn_moment: Narrow {
        name: "shielded helion magn. moment",
        value: -1.074553024e-26,
        uncertainty: 9.3e-34,
        unit: "J T^-1",
    }

    shielded_helion_magn_moment_to_Bohr_magneton_ratio: Narrow {
        name: "shielded helion magn. moment to Bohr magneton ratio",
        value: -0.001158671474,
        uncertainty: 1.4e-11,
        unit: "",
    }

    shielded_helion_magn_moment_to_nuclear_magneton_ratio: Narrow {
        name: "shielded helion magn. moment to nuclear magneton ratio",
        value: -2.127497723,
        uncertainty: 2.5e-08,
        unit: "",
    }

    shielded_helion_to_proton_magn_moment_ratio: Narrow {
        name: "shielded helion to proton magn. moment ratio",
        value: -0.761766562,
        uncertainty: 1.2e-08,
        unit: "",
    }

    shielded_helion_to_shielded_proton_magn_moment_ratio: Narrow {
        name: "shielded helion to shielded proton magn. moment ratio",
        value: -0.7617861313,
        uncertainty: 3.3e-09,
        unit: "",
    }

    shielded_proton_magn_moment: Narrow {
        name: "shielded proton magn. moment",
        value: 1.41057047e-26,
        uncertainty: 1.2e-33,
        unit: "J T^-1",
    }

    shielded_proton_magn_moment_to_Bohr_magneton_ratio: Narrow {
        name: "shielded proton magn. moment to Bohr magneton ratio",
        value: 0.001520993132,
        uncertainty: 1.6e-11,
        unit: "",
    }

    shielded_proton_magn_moment_to_nuclear_magneton_ratio: Narrow {
        name: "shielded proton magn. moment to nuclear magneton ratio",
        value: 2.792775604,
        uncertainty: 3e-08,
        unit: "",
    }

    lattice_spacing_of_silicon_220: Narrow {
        name: "{220} lattice spacing of silicon",
        value: 1.920155965e-10,
        uncertainty: 7e-18,
        unit: "m",
    }
}
