//! CODATA 2006 recommended values of the fundamental physical constants.
//!
//! Source: P. J. Mohr, B. N. Taylor and D. B. Newell, "CODATA recommended
//! values of the fundamental physical constants: 2006", Rev. Mod. Phys. 80,
//! 633 (2008). <https://physics.nist.gov/cuu/Constants/>
//!
//! Every constant is a unit struct named after its CODATA name: spaces,
//! periods, hyphens, slashes, commas and parentheses are dropped or turned
//! into underscores, and capitalised proper names keep their case.
//!
//! ```
//! use codata::codata_2006::{electron_mass, fine_structure_constant, speed_of_light_in_vacuum};
//!
//! assert_eq!(electron_mass::value::<f64>(), 9.10938215e-31);
//! assert_eq!(electron_mass::uncertainty::<f64>(), 4.5e-38);
//! assert_eq!(speed_of_light_in_vacuum::precision::<f64>(), 0.0);
//! assert_eq!(fine_structure_constant::value::<f32>(), 0.0072973525376_f64 as f32);
//! ```
//!
//! Six constants leave the single-precision range (the kilogram-hertz,
//! kilogram-inverse meter, kilogram-kelvin and hertz-kilogram relationships,
//! and the atomic units of 1st and 2nd hyperpolarizability). They are classed
//! [`Wide`](codata_core::Wide) and can only be read as `f64` or `Extended`.

codata_core::codata_table! {
    revision: 2006;

    lattice_spacing_of_silicon: Narrow {
        name: "lattice spacing of silicon",
        value: 1.920155762e-10,
        uncertainty: 5e-18,
        unit: "m",
    }

    alpha_particle_electron_mass_ratio: Narrow {
        name: "alpha particle-electron mass ratio",
        value: 7294.2995365,
        uncertainty: 3.1e-06,
        unit: "",
    }

    alpha_particle_mass: Narrow {
        name: "alpha particle mass",
        value: 6.6446562e-27,
        uncertainty: 3.3e-34,
        unit: "kg",
    }

    alpha_particle_mass_energy_equivalent: Narrow {
        name: "alpha particle mass energy equivalent",
        value: 5.97191917e-10,
        uncertainty: 3e-17,
        unit: "J",
    }

    alpha_particle_mass_energy_equivalent_in_MeV: Narrow {
        name: "alpha particle mass energy equivalent in MeV",
        value: 3727.379109,
        uncertainty: 9.3e-05,
        unit: "MeV",
    }

    alpha_particle_mass_in_u: Narrow {
        name: "alpha particle mass in u",
        value: 4.001506179127,
        uncertainty: 6.2e-11,
        unit: "u",
    }

    alpha_particle_molar_mass: Narrow {
        name: "alpha particle molar mass",
        value: 0.004001506179127,
        uncertainty: 6.2e-14,
        unit: "kg mol^-1",
    }

    alpha_particle_proton_mass_ratio: Narrow {
        name: "alpha particle-proton mass ratio",
        value: 3.97259968951,
        uncertainty: 4.1e-10,
        unit: "",
    }

    Angstrom_star: Narrow {
        name: "Angstrom star",
        value: 1.00001498e-10,
        uncertainty: 9e-17,
        unit: "m",
    }

    atomic_mass_constant: Narrow {
        name: "atomic mass constant",
        value: 1.660538782e-27,
        uncertainty: 8.3e-35,
        unit: "kg",
    }

    atomic_mass_constant_energy_equivalent: Narrow {
        name: "atomic mass constant energy equivalent",
        value: 1.49241783e-10,
        uncertainty: 7.4e-18,
        unit: "J",
    }

    atomic_mass_constant_energy_equivalent_in_MeV: Narrow {
        name: "atomic mass constant energy equivalent in MeV",
        value: 931.494028,
        uncertainty: 2.3e-05,
        unit: "MeV",
    }

    atomic_mass_unit_electron_volt_relationship: Narrow {
        name: "atomic mass unit-electron volt relationship",
        value: 931494028.0,
        uncertainty: 23.0,
        unit: "eV",
    }

    atomic_mass_unit_hartree_relationship: Narrow {
        name: "atomic mass unit-hartree relationship",
        value: 34231777.149,
        uncertainty: 0.049,
        unit: "E_h",
    }

    atomic_mass_unit_hertz_relationship: Narrow {
        name: "atomic mass unit-hertz relationship",
        value: 2.2523427369e+23,
        uncertainty: 320000000000000.0,
        unit: "Hz",
    }

    atomic_mass_unit_inverse_meter_relationship: Narrow {
        name: "atomic mass unit-inverse meter relationship",
        value: 751300667100000.0,
        uncertainty: 1100000.0,
        unit: "m^-1",
    }

    atomic_mass_unit_joule_relationship: Narrow {
        name: "atomic mass unit-joule relationship",
        value: 1.49241783e-10,
        uncertainty: 7.4e-18,
        unit: "J",
    }

    atomic_mass_unit_kelvin_relationship: Narrow {
        name: "atomic mass unit-kelvin relationship",
        value: 10809527000000.0,
        uncertainty: 19000000.0,
        unit: "K",
    }

    atomic_mass_unit_kilogram_relationship: Narrow {
        name: "atomic mass unit-kilogram relationship",
        value: 1.660538782e-27,
        uncertainty: 8.3e-35,
        unit: "kg",
    }

    atomic_unit_of_1st_hyperpolarizability: Wide {
        name: "atomic unit of 1st hyperpolarizability",
        value: 3.206361533e-53,
        uncertainty: 8.1e-61,
        unit: "C^3 m^3 J^-2",
    }

    atomic_unit_of_2nd_hyperpolarizability: Wide {
        name: "atomic unit of 2nd hyperpolarizability",
        value: 6.23538095e-65,
        uncertainty: 3.1e-72,
        unit: "C^4 m^4 J^-3",
    }

    atomic_unit_of_action: Narrow {
        name: "atomic unit of action",
        value: 1.054571628e-34,
        uncertainty: 5.3e-42,
        unit: "J s",
    }

    atomic_unit_of_charge: Narrow {
        name: "atomic unit of charge",
        value: 1.602176487e-19,
        uncertainty: 4e-27,
        unit: "C",
    }

    atomic_unit_of_charge_density: Narrow {
        name: "atomic unit of charge density",
        value: 1081202300000.0,
        uncertainty: 27000.0,
        unit: "C m^-3",
    }

    atomic_unit_of_current: Narrow {
        name: "atomic unit of current",
        value: 0.00662361763,
        uncertainty: 1.7e-10,
        unit: "A",
    }

    atomic_unit_of_electric_dipole_mom: Narrow {
        name: "atomic unit of electric dipole mom.",
        value: 8.47835281e-30,
        uncertainty: 2.1e-37,
        unit: "C m",
    }

    atomic_unit_of_electric_field: Narrow {
        name: "atomic unit of electric field",
        value: 514220632000.0,
        uncertainty: 13000.0,
        unit: "V m^-1",
    }

    atomic_unit_of_electric_field_gradient: Narrow {
        name: "atomic unit of electric field gradient",
        value: 9.71736166e+21,
        uncertainty: 240000000000000.0,
        unit: "V m^-2",
    }

    atomic_unit_of_electric_polarizability: Narrow {
        name: "atomic unit of electric polarizability",
        value: 1.6487772536e-41,
        uncertainty: 3.4e-50,
        unit: "C^2 m^2 J^-1",
    }

    atomic_unit_of_electric_potential: Narrow {
        name: "atomic unit of electric potential",
        value: 27.21138386,
        uncertainty: 6.8e-07,
        unit: "V",
    }

    atomic_unit_of_electric_quadrupole_mom: Narrow {
        name: "atomic unit of electric quadrupole mom.",
        value: 4.48655107e-40,
        uncertainty: 1.1e-47,
        unit: "C m^2",
    }

    atomic_unit_of_energy: Narrow {
        name: "atomic unit of energy",
        value: 4.35974394e-18,
        uncertainty: 2.2e-25,
        unit: "J",
    }

    atomic_unit_of_force: Narrow {
        name: "atomic unit of force",
        value: 8.23872206e-08,
        uncertainty: 4.1e-15,
        unit: "N",
    }

    atomic_unit_of_length: Narrow {
        name: "atomic unit of length",
        value: 5.2917720859e-11,
        uncertainty: 3.6e-20,
        unit: "m",
    }

    atomic_unit_of_mag_dipole_mom: Narrow {
        name: "atomic unit of mag. dipole mom.",
        value: 1.85480183e-23,
        uncertainty: 4.6e-31,
        unit: "J T^-1",
    }

    atomic_unit_of_mag_flux_density: Narrow {
        name: "atomic unit of mag. flux density",
        value: 235051.7382,
        uncertainty: 0.0059,
        unit: "T",
    }

    atomic_unit_of_magnetizability: Narrow {
        name: "atomic unit of magnetizability",
        value: 7.891036433e-29,
        uncertainty: 2.7e-37,
        unit: "J T^-2",
    }

    atomic_unit_of_mass: Narrow {
        name: "atomic unit of mass",
        value: 9.10938215e-31,
        uncertainty: 4.5e-38,
        unit: "kg",
    }

    atomic_unit_of_momentum: Narrow {
        name: "atomic unit of momentum",
        value: 1.992851565e-24,
        uncertainty: 9.9e-32,
        unit: "kg m s^-1",
    }

    atomic_unit_of_permittivity: Narrow {
        name: "atomic unit of permittivity",
        value: 1.112650056e-10,
        uncertainty: 0.0,
        unit: "F m^-1",
    }

    atomic_unit_of_time: Narrow {
        name: "atomic unit of time",
        value: 2.418884326505e-17,
        uncertainty: 1.6e-12,
        unit: "7 s",
    }

    atomic_unit_of_velocity: Narrow {
        name: "atomic unit of velocity",
        value: 2187691.2541,
        uncertainty: 0.0015,
        unit: "m s^-1",
    }

    Avogadro_constant: Narrow {
        name: "Avogadro constant",
        value: 6.02214179e+23,
        uncertainty: 3e+16,
        unit: "mol^-1",
    }

    Bohr_magneton: Narrow {
        name: "Bohr magneton",
        value: 9.27400915e-24,
        uncertainty: 2.3e-31,
        unit: "J T^-1",
    }

    Bohr_magneton_in_eV_T: Narrow {
        name: "Bohr magneton in eV/T",
        value: 5.7883817555e-05,
        uncertainty: 7.9e-14,
        unit: "eV T^-1",
    }

    Bohr_magneton_in_Hz_T: Narrow {
        name: "Bohr magneton in Hz/T",
        value: 13996246040.0,
        uncertainty: 350.0,
        unit: "Hz T^-1",
    }

    Bohr_magneton_in_inverse_meters_per_tesla: Narrow {
        name: "Bohr magneton in inverse meters per tesla",
        value: 46.6864515,
        uncertainty: 1.2e-06,
        unit: "m^-1 T^-1",
    }

    Bohr_magneton_in_K_T: Narrow {
        name: "Bohr magneton in K/T",
        value: 0.6717131,
        uncertainty: 1.2e-06,
        unit: "K T^-1",
    }

    Bohr_radius: Narrow {
        name: "Bohr radius",
        value: 5.2917720859e-11,
        uncertainty: 3.6e-20,
        unit: "m",
    }

    Boltzmann_constant: Narrow {
        name: "Boltzmann constant",
        value: 1.3806504e-23,
        uncertainty: 2.4e-29,
        unit: "J K^-1",
    }

    Boltzmann_constant_in_eV_K: Narrow {
        name: "Boltzmann constant in eV/K",
        value: 8.617343e-05,
        uncertainty: 1.5e-10,
        unit: "eV K^-1",
    }

    Boltzmann_constant_in_Hz_K: Narrow {
        name: "Boltzmann constant in Hz/K",
        value: 20836644000.0,
        uncertainty: 36000.0,
        unit: "Hz K^-1",
    }

    Boltzmann_constant_in_inverse_meters_per_kelvin: Narrow {
        name: "Boltzmann constant in inverse meters per kelvin",
        value: 69.50356,
        uncertainty: 0.00012,
        unit: "m^-1 K^-1",
    }

    characteristic_impedance_of_vacuum: Narrow {
        name: "characteristic impedance of vacuum",
        value: 376.730313461,
        uncertainty: 0.0,
        unit: "ohm",
    }

    classical_electron_radius: Narrow {
        name: "classical electron radius",
        value: 2.8179402894e-15,
        uncertainty: 5.8e-24,
        unit: "m",
    }

    Compton_wavelength: Narrow {
        name: "Compton wavelength",
        value: 2.4263102175e-12,
        uncertainty: 3.3e-21,
        unit: "m",
    }

    Compton_wavelength_over_2_pi: Narrow {
        name: "Compton wavelength over 2 pi",
        value: 3.8615926459e-13,
        uncertainty: 5.3e-22,
        unit: "m",
    }

    conductance_quantum: Narrow {
        name: "conductance quantum",
        value: 7.7480917004e-05,
        uncertainty: 5.3e-14,
        unit: "S",
    }

    conventional_value_of_Josephson_constant: Narrow {
        name: "conventional value of Josephson constant",
        value: 483597900000000.0,
        uncertainty: 0.0,
        unit: "Hz V^-1",
    }

    conventional_value_of_von_Klitzing_constant: Narrow {
        name: "conventional value of von Klitzing constant",
        value: 25812.807,
        uncertainty: 0.0,
        unit: "ohm",
    }

    Cu_x_unit: Narrow {
        name: "Cu x unit",
        value: 1.00207699e-13,
        uncertainty: 2.8e-20,
        unit: "m",
    }

    deuteron_electron_mag_mom_ratio: Narrow {
        name: "deuteron-electron mag. mom. ratio",
        value: -0.0004664345537,
        uncertainty: 3.9e-12,
        unit: "",
    }

    deuteron_electron_mass_ratio: Narrow {
        name: "deuteron-electron mass ratio",
        value: 3670.4829654,
        uncertainty: 1.6e-06,
        unit: "",
    }

    deuteron_g_factor: Narrow {
        name: "deuteron g factor",
        value: 0.8574382308,
        uncertainty: 7.2e-09,
        unit: "",
    }

    deuteron_mag_mom: Narrow {
        name: "deuteron mag. mom.",
        value: 4.33073465e-27,
        uncertainty: 1.1e-34,
        unit: "J T^-1",
    }

    deuteron_mag_mom_to_Bohr_magneton_ratio: Narrow {
        name: "deuteron mag. mom. to Bohr magneton ratio",
        value: 0.0004669754556,
        uncertainty: 3.9e-12,
        unit: "",
    }

    deuteron_mag_mom_to_nuclear_magneton_ratio: Narrow {
        name: "deuteron mag. mom. to nuclear magneton ratio",
        value: 0.8574382308,
        uncertainty: 7.2e-09,
        unit: "",
    }

    deuteron_mass: Narrow {
        name: "deuteron mass",
        value: 3.3435832e-27,
        uncertainty: 1.7e-34,
        unit: "kg",
    }

    deuteron_mass_energy_equivalent: Narrow {
        name: "deuteron mass energy equivalent",
        value: 3.00506272e-10,
        uncertainty: 1.5e-17,
        unit: "J",
    }

    deuteron_mass_energy_equivalent_in_MeV: Narrow {
        name: "deuteron mass energy equivalent in MeV",
        value: 1875.612793,
        uncertainty: 4.7e-05,
        unit: "MeV",
    }

    deuteron_mass_in_u: Narrow {
        name: "deuteron mass in u",
        value: 2.013553212724,
        uncertainty: 7.8e-11,
        unit: "u",
    }

    deuteron_molar_mass: Narrow {
        name: "deuteron molar mass",
        value: 0.002013553212724,
        uncertainty: 7.8e-14,
        unit: "kg mol^-1",
    }

    deuteron_neutron_mag_mom_ratio: Narrow {
        name: "deuteron-neutron mag. mom. ratio",
        value: -0.44820652,
        uncertainty: 1.1e-07,
        unit: "",
    }

    deuteron_proton_mag_mom_ratio: Narrow {
        name: "deuteron-proton mag. mom. ratio",
        value: 0.307012207,
        uncertainty: 2.4e-09,
        unit: "",
    }

    deuteron_proton_mass_ratio: Narrow {
        name: "deuteron-proton mass ratio",
        value: 1.99900750108,
        uncertainty: 2.2e-10,
        unit: "",
    }

    deuteron_rms_charge_radius: Narrow {
        name: "deuteron rms charge radius",
        value: 2.1402e-15,
        uncertainty: 2.8e-18,
        unit: "m",
    }

    electric_constant: Narrow {
        name: "electric constant",
        value: 8.854187817e-12,
        uncertainty: 0.0,
        unit: "F m^-1",
    }

    electron_charge_to_mass_quotient: Narrow {
        name: "electron charge to mass quotient",
        value: -175882015000.0,
        uncertainty: 4400.0,
        unit: "C kg^-1",
    }

    electron_deuteron_mag_mom_ratio: Narrow {
        name: "electron-deuteron mag. mom. ratio",
        value: -2143.923498,
        uncertainty: 1.8e-05,
        unit: "",
    }

    electron_deuteron_mass_ratio: Narrow {
        name: "electron-deuteron mass ratio",
        value: 0.00027244371093,
        uncertainty: 1.2e-13,
        unit: "",
    }

    electron_g_factor: Narrow {
        name: "electron g factor",
        value: -2.0023193043622,
        uncertainty: 1.5e-12,
        unit: "",
    }

    electron_gyromag_ratio: Narrow {
        name: "electron gyromag. ratio",
        value: 176085977000.0,
        uncertainty: 4400.0,
        unit: "s^-1 T^-1",
    }

    electron_gyromag_ratio_over_2_pi: Narrow {
        name: "electron gyromag. ratio over 2 pi",
        value: 28024.95364,
        uncertainty: 0.0007,
        unit: "MHz T^-1",
    }

    electron_mag_mom: Narrow {
        name: "electron mag. mom.",
        value: -9.28476377e-24,
        uncertainty: 2.3e-31,
        unit: "J T^-1",
    }

    electron_mag_mom_anomaly: Narrow {
        name: "electron mag. mom. anomaly",
        value: 0.00115965218111,
        uncertainty: 7.4e-13,
        unit: "",
    }

    electron_mag_mom_to_Bohr_magneton_ratio: Narrow {
        name: "electron mag. mom. to Bohr magneton ratio",
        value: -1.00115965218111,
        uncertainty: 7.4e-13,
        unit: "",
    }

    electron_mag_mom_to_nuclear_magneton_ratio: Narrow {
        name: "electron mag. mom. to nuclear magneton ratio",
        value: -1838.28197092,
        uncertainty: 8e-07,
        unit: "",
    }

    electron_mass: Narrow {
        name: "electron mass",
        value: 9.10938215e-31,
        uncertainty: 4.5e-38,
        unit: "kg",
    }

    electron_mass_energy_equivalent: Narrow {
        name: "electron mass energy equivalent",
        value: 8.18710438e-14,
        uncertainty: 4.1e-21,
        unit: "J",
    }

    electron_mass_energy_equivalent_in_MeV: Narrow {
        name: "electron mass energy equivalent in MeV",
        value: 0.51099891,
        uncertainty: 1.3e-08,
        unit: "MeV",
    }

    electron_mass_in_u: Narrow {
        name: "electron mass in u",
        value: 0.00054857990943,
        uncertainty: 2.3e-13,
        unit: "u",
    }

    electron_molar_mass: Narrow {
        name: "electron molar mass",
        value: 5.4857990943e-07,
        uncertainty: 2.3e-16,
        unit: "kg mol^-1",
    }

    electron_muon_mag_mom_ratio: Narrow {
        name: "electron-muon mag. mom. ratio",
        value: 206.7669877,
        uncertainty: 5.2e-06,
        unit: "",
    }

    electron_muon_mass_ratio: Narrow {
        name: "electron-muon mass ratio",
        value: 0.00483633171,
        uncertainty: 1.2e-10,
        unit: "",
    }

    electron_neutron_mag_mom_ratio: Narrow {
        name: "electron-neutron mag. mom. ratio",
        value: 960.9205,
        uncertainty: 0.00023,
        unit: "",
    }

    electron_neutron_mass_ratio: Narrow {
        name: "electron-neutron mass ratio",
        value: 0.00054386734459,
        uncertainty: 3.3e-13,
        unit: "",
    }

    electron_proton_mag_mom_ratio: Narrow {
        name: "electron-proton mag. mom. ratio",
        value: -658.2106848,
        uncertainty: 5.4e-06,
        unit: "",
    }

    electron_proton_mass_ratio: Narrow {
        name: "electron-proton mass ratio",
        value: 0.00054461702177,
        uncertainty: 2.4e-13,
        unit: "",
    }

    electron_tau_mass_ratio: Narrow {
        name: "electron-tau mass ratio",
        value: 0.000287564,
        uncertainty: 4.7e-08,
        unit: "",
    }

    electron_to_alpha_particle_mass_ratio: Narrow {
        name: "electron to alpha particle mass ratio",
        value: 0.00013709335557,
        uncertainty: 5.8e-14,
        unit: "",
    }

    electron_to_shielded_helion_mag_mom_ratio: Narrow {
        name: "electron to shielded helion mag. mom. ratio",
        value: 864.058257,
        uncertainty: 1e-05,
        unit: "",
    }

    electron_to_shielded_proton_mag_mom_ratio: Narrow {
        name: "electron to shielded proton mag. mom. ratio",
        value: -658.2275971,
        uncertainty: 7.2e-06,
        unit: "",
    }

    electron_volt: Narrow {
        name: "electron volt",
        value: 1.602176487e-19,
        uncertainty: 4e-27,
        unit: "J",
    }

    electron_volt_atomic_mass_unit_relationship: Narrow {
        name: "electron volt-atomic mass unit relationship",
        value: 1.073544188e-09,
        uncertainty: 2.7e-17,
        unit: "u",
    }

    electron_volt_hartree_relationship: Narrow {
        name: "electron volt-hartree relationship",
        value: 0.0367493254,
        uncertainty: 9.2e-10,
        unit: "E_h",
    }

    electron_volt_hertz_relationship: Narrow {
        name: "electron volt-hertz relationship",
        value: 241798945400000.0,
        uncertainty: 6000000.0,
        unit: "Hz",
    }

    electron_volt_inverse_meter_relationship: Narrow {
        name: "electron volt-inverse meter relationship",
        value: 806554.465,
        uncertainty: 0.02,
        unit: "m^-1",
    }

    electron_volt_joule_relationship: Narrow {
        name: "electron volt-joule relationship",
        value: 1.602176487e-19,
        uncertainty: 4e-27,
        unit: "J",
    }

    electron_volt_kelvin_relationship: Narrow {
        name: "electron volt-kelvin relationship",
        value: 11604.505,
        uncertainty: 0.02,
        unit: "K",
    }

    electron_volt_kilogram_relationship: Narrow {
        name: "electron volt-kilogram relationship",
        value: 1.782661758e-36,
        uncertainty: 4.4e-44,
        unit: "kg",
    }

    elementary_charge: Narrow {
        name: "elementary charge",
        value: 1.602176487e-19,
        uncertainty: 4e-27,
        unit: "C",
    }

    elementary_charge_over_h: Narrow {
        name: "elementary charge over h",
        value: 241798945400000.0,
        uncertainty: 6000000.0,
        unit: "A J^-1",
    }

    Faraday_constant: Narrow {
        name: "Faraday constant",
        value: 96485.3399,
        uncertainty: 0.0024,
        unit: "C mol^-1",
    }

    Faraday_constant_for_conventional_electric_current: Narrow {
        name: "Faraday constant for conventional electric current",
        value: 96485.3401,
        uncertainty: 0.0048,
        unit: "C_90 mol^-1",
    }

    Fermi_coupling_constant: Narrow {
        name: "Fermi coupling constant",
        value: 1.16637e-05,
        uncertainty: 1e-10,
        unit: "GeV^-2",
    }

    fine_structure_constant: Narrow {
        name: "fine-structure constant",
        value: 0.0072973525376,
        uncertainty: 5e-12,
        unit: "",
    }

    first_radiation_constant: Narrow {
        name: "first radiation constant",
        value: 3.74177118e-16,
        uncertainty: 1.9e-23,
        unit: "W m^2",
    }

    first_radiation_constant_for_spectral_radiance: Narrow {
        name: "first radiation constant for spectral radiance",
        value: 1.191042759e-16,
        uncertainty: 5.9e-24,
        unit: "W m^2 sr^-1",
    }

    hartree_atomic_mass_unit_relationship: Narrow {
        name: "hartree-atomic mass unit relationship",
        value: 2.9212622986e-08,
        uncertainty: 4.2e-17,
        unit: "u",
    }

    hartree_electron_volt_relationship: Narrow {
        name: "hartree-electron volt relationship",
        value: 27.21138386,
        uncertainty: 6.8e-07,
        unit: "eV",
    }

    Hartree_energy: Narrow {
        name: "Hartree energy",
        value: 4.35974394e-18,
        uncertainty: 2.2e-25,
        unit: "J",
    }

    Hartree_energy_in_eV: Narrow {
        name: "Hartree energy in eV",
        value: 27.21138386,
        uncertainty: 6.8e-07,
        unit: "eV",
    }

    hartree_hertz_relationship: Narrow {
        name: "hartree-hertz relationship",
        value: 6579683920722000.0,
        uncertainty: 44000.0,
        unit: "Hz",
    }

    hartree_inverse_meter_relationship: Narrow {
        name: "hartree-inverse meter relationship",
        value: 21947463.13705,
        uncertainty: 0.00015,
        unit: "m^-1",
    }

    hartree_joule_relationship: Narrow {
        name: "hartree-joule relationship",
        value: 4.35974394e-18,
        uncertainty: 2.2e-25,
        unit: "J",
    }

    hartree_kelvin_relationship: Narrow {
        name: "hartree-kelvin relationship",
        value: 315774.65,
        uncertainty: 0.55,
        unit: "K",
    }

    hartree_kilogram_relationship: Narrow {
        name: "hartree-kilogram relationship",
        value: 4.85086934e-35,
        uncertainty: 2.4e-42,
        unit: "kg",
    }

    helion_electron_mass_ratio: Narrow {
        name: "helion-electron mass ratio",
        value: 5495.8852765,
        uncertainty: 5.2e-06,
        unit: "",
    }

    helion_mass: Narrow {
        name: "helion mass",
        value: 5.00641192e-27,
        uncertainty: 2.5e-34,
        unit: "kg",
    }

    helion_mass_energy_equivalent: Narrow {
        name: "helion mass energy equivalent",
        value: 4.49953864e-10,
        uncertainty: 2.2e-17,
        unit: "J",
    }

    helion_mass_energy_equivalent_in_MeV: Narrow {
        name: "helion mass energy equivalent in MeV",
        value: 2808.391383,
        uncertainty: 7e-05,
        unit: "MeV",
    }

    helion_mass_in_u: Narrow {
        name: "helion mass in u",
        value: 3.0149322473,
        uncertainty: 2.6e-09,
        unit: "u",
    }

    helion_molar_mass: Narrow {
        name: "helion molar mass",
        value: 0.0030149322473,
        uncertainty: 2.6e-12,
        unit: "kg mol^-1",
    }

    helion_proton_mass_ratio: Narrow {
        name: "helion-proton mass ratio",
        value: 2.9931526713,
        uncertainty: 2.6e-09,
        unit: "",
    }

    hertz_atomic_mass_unit_relationship: Narrow {
        name: "hertz-atomic mass unit relationship",
        value: 4.4398216294e-24,
        uncertainty: 6.4e-33,
        unit: "u",
    }

    hertz_electron_volt_relationship: Narrow {
        name: "hertz-electron volt relationship",
        value: 4.13566733e-15,
        uncertainty: 1e-22,
        unit: "eV",
    }

    hertz_hartree_relationship: Narrow {
        name: "hertz-hartree relationship",
        value: 1.519829846006e-16,
        uncertainty: 1e-27,
        unit: "E_h",
    }

    hertz_inverse_meter_relationship: Narrow {
        name: "hertz-inverse meter relationship",
        value: 3.335640951e-09,
        uncertainty: 0.0,
        unit: "m^-1",
    }

    hertz_joule_relationship: Narrow {
        name: "hertz-joule relationship",
        value: 6.62606896e-34,
        uncertainty: 3.3e-41,
        unit: "J",
    }

    hertz_kelvin_relationship: Narrow {
        name: "hertz-kelvin relationship",
        value: 4.7992374e-11,
        uncertainty: 8.4e-17,
        unit: "K",
    }

    hertz_kilogram_relationship: Wide {
        name: "hertz-kilogram relationship",
        value: 7.372496e-51,
        uncertainty: 3.7e-58,
        unit: "kg",
    }

    inverse_fine_structure_constant: Narrow {
        name: "inverse fine-structure constant",
        value: 137.035999679,
        uncertainty: 9.4e-08,
        unit: "",
    }

    inverse_meter_atomic_mass_unit_relationship: Narrow {
        name: "inverse meter-atomic mass unit relationship",
        value: 1.3310250394e-15,
        uncertainty: 1.9e-24,
        unit: "u",
    }

    inverse_meter_electron_volt_relationship: Narrow {
        name: "inverse meter-electron volt relationship",
        value: 1.239841875e-06,
        uncertainty: 3.1e-14,
        unit: "eV",
    }

    inverse_meter_hartree_relationship: Narrow {
        name: "inverse meter-hartree relationship",
        value: 4.55633525276e-08,
        uncertainty: 3e-19,
        unit: "E_h",
    }

    inverse_meter_hertz_relationship: Narrow {
        name: "inverse meter-hertz relationship",
        value: 299792458.0,
        uncertainty: 0.0,
        unit: "Hz",
    }

    inverse_meter_joule_relationship: Narrow {
        name: "inverse meter-joule relationship",
        value: 1.986445501e-25,
        uncertainty: 9.9e-33,
        unit: "J",
    }

    inverse_meter_kelvin_relationship: Narrow {
        name: "inverse meter-kelvin relationship",
        value: 0.014387752,
        uncertainty: 2.5e-08,
        unit: "K",
    }

    inverse_meter_kilogram_relationship: Narrow {
        name: "inverse meter-kilogram relationship",
        value: 2.2102187e-42,
        uncertainty: 1.1e-49,
        unit: "kg",
    }

    inverse_of_conductance_quantum: Narrow {
        name: "inverse of conductance quantum",
        value: 12906.4037787,
        uncertainty: 8.8e-06,
        unit: "ohm",
    }

    Josephson_constant: Narrow {
        name: "Josephson constant",
        value: 483597891000000.0,
        uncertainty: 12000000.0,
        unit: "Hz V^-1",
    }

    joule_atomic_mass_unit_relationship: Narrow {
        name: "joule-atomic mass unit relationship",
        value: 6700536410.0,
        uncertainty: 330.0,
        unit: "u",
    }

    joule_electron_volt_relationship: Narrow {
        name: "joule-electron volt relationship",
        value: 6.24150965e+18,
        uncertainty: 160000000000.0,
        unit: "eV",
    }

    joule_hartree_relationship: Narrow {
        name: "joule-hartree relationship",
        value: 2.29371269e+17,
        uncertainty: 11000000000.0,
        unit: "E_h",
    }

    joule_hertz_relationship: Narrow {
        name: "joule-hertz relationship",
        value: 1.50919045e+33,
        uncertainty: 7.5e+25,
        unit: "Hz",
    }

    joule_inverse_meter_relationship: Narrow {
        name: "joule-inverse meter relationship",
        value: 5.03411747e+24,
        uncertainty: 2.5e+17,
        unit: "m^-1",
    }

    joule_kelvin_relationship: Narrow {
        name: "joule-kelvin relationship",
        value: 7.242963e+22,
        uncertainty: 1.3e+17,
        unit: "K",
    }

    joule_kilogram_relationship: Narrow {
        name: "joule-kilogram relationship",
        value: 1.112650056e-17,
        uncertainty: 0.0,
        unit: "kg",
    }

    kelvin_atomic_mass_unit_relationship: Narrow {
        name: "kelvin-atomic mass unit relationship",
        value: 9.251098e-14,
        uncertainty: 1.6e-19,
        unit: "u",
    }

    kelvin_electron_volt_relationship: Narrow {
        name: "kelvin-electron volt relationship",
        value: 8.617343e-05,
        uncertainty: 1.5e-10,
        unit: "eV",
    }

    kelvin_hartree_relationship: Narrow {
        name: "kelvin-hartree relationship",
        value: 3.1668153e-06,
        uncertainty: 5.5e-12,
        unit: "E_h",
    }

    kelvin_hertz_relationship: Narrow {
        name: "kelvin-hertz relationship",
        value: 20836644000.0,
        uncertainty: 36000.0,
        unit: "Hz",
    }

    kelvin_inverse_meter_relationship: Narrow {
        name: "kelvin-inverse meter relationship",
        value: 69.50356,
        uncertainty: 0.00012,
        unit: "m^-1",
    }

    kelvin_joule_relationship: Narrow {
        name: "kelvin-joule relationship",
        value: 1.3806504e-23,
        uncertainty: 2.4e-29,
        unit: "J",
    }

    kelvin_kilogram_relationship: Narrow {
        name: "kelvin-kilogram relationship",
        value: 1.5361807e-40,
        uncertainty: 2.7e-46,
        unit: "kg",
    }

    kilogram_atomic_mass_unit_relationship: Narrow {
        name: "kilogram-atomic mass unit relationship",
        value: 6.02214179e+26,
        uncertainty: 3e+19,
        unit: "u",
    }

    kilogram_electron_volt_relationship: Narrow {
        name: "kilogram-electron volt relationship",
        value: 5.60958912e+35,
        uncertainty: 1.4e+28,
        unit: "eV",
    }

    kilogram_hartree_relationship: Narrow {
        name: "kilogram-hartree relationship",
        value: 2.06148616e+34,
        uncertainty: 1e+27,
        unit: "E_h",
    }

    kilogram_hertz_relationship: Wide {
        name: "kilogram-hertz relationship",
        value: 1.356392733e+50,
        uncertainty: 6.8e+42,
        unit: "Hz",
    }

    kilogram_inverse_meter_relationship: Wide {
        name: "kilogram-inverse meter relationship",
        value: 4.52443915e+41,
        uncertainty: 2.3e+34,
        unit: "m^-1",
    }

    kilogram_joule_relationship: Narrow {
        name: "kilogram-joule relationship",
        value: 8.987551787e+16,
        uncertainty: 0.0,
        unit: "J",
    }

    kilogram_kelvin_relationship: Wide {
        name: "kilogram-kelvin relationship",
        value: 6.509651e+39,
        uncertainty: 1.1e+34,
        unit: "K",
    }

    lattice_parameter_of_silicon: Narrow {
        name: "lattice parameter of silicon",
        value: 5.43102064e-10,
        uncertainty: 1.4e-17,
        unit: "m",
    }

    Loschmidt_constant_27315_K_101325_kPa: Narrow {
        name: "Loschmidt constant (273.15 K, 101.325 kPa)",
        value: 2.6867774e+25,
        uncertainty: 4.7e+19,
        unit: "m^-3",
    }

    mag_constant: Narrow {
        name: "mag. constant",
        value: 1.2566370614e-06,
        uncertainty: 0.0,
        unit: "N A^-2",
    }

    mag_flux_quantum: Narrow {
        name: "mag. flux quantum",
        value: 2.067833667e-15,
        uncertainty: 5.2e-23,
        unit: "Wb",
    }

    molar_gas_constant: Narrow {
        name: "molar gas constant",
        value: 8.314472,
        uncertainty: 1.5e-05,
        unit: "J mol^-1 K^-1",
    }

    molar_mass_constant: Narrow {
        name: "molar mass constant",
        value: 0.001,
        uncertainty: 0.0,
        unit: "kg mol^-1",
    }

    molar_mass_of_carbon_12: Narrow {
        name: "molar mass of carbon-12",
        value: 0.012,
        uncertainty: 0.0,
        unit: "kg mol^-1",
    }

    molar_Planck_constant: Narrow {
        name: "molar Planck constant",
        value: 3.9903126821e-10,
        uncertainty: 5.7e-19,
        unit: "J s mol^-1",
    }

    molar_Planck_constant_times_c: Narrow {
        name: "molar Planck constant times c",
        value: 0.11962656472,
        uncertainty: 1.7e-10,
        unit: "J m mol^-1",
    }

    molar_volume_of_ideal_gas_27315_K_100_kPa: Narrow {
        name: "molar volume of ideal gas (273.15 K, 100 kPa)",
        value: 0.022710981,
        uncertainty: 4e-08,
        unit: "m^3 mol^-1",
    }

    molar_volume_of_ideal_gas_27315_K_101325_kPa: Narrow {
        name: "molar volume of ideal gas (273.15 K, 101.325 kPa)",
        value: 0.022413996,
        uncertainty: 3.9e-08,
        unit: "m^3 mol^-1",
    }

    molar_volume_of_silicon: Narrow {
        name: "molar volume of silicon",
        value: 1.20588349e-05,
        uncertainty: 1.1e-12,
        unit: "m^3 mol^-1",
    }

    Mo_x_unit: Narrow {
        name: "Mo x unit",
        value: 1.00209955e-13,
        uncertainty: 5.3e-20,
        unit: "m",
    }

    muon_Compton_wavelength: Narrow {
        name: "muon Compton wavelength",
        value: 1.173444104e-14,
        uncertainty: 3e-22,
        unit: "m",
    }

    muon_Compton_wavelength_over_2_pi: Narrow {
        name: "muon Compton wavelength over 2 pi",
        value: 1.867594295e-15,
        uncertainty: 4.7e-23,
        unit: "m",
    }

    muon_electron_mass_ratio: Narrow {
        name: "muon-electron mass ratio",
        value: 206.7682823,
        uncertainty: 5.2e-06,
        unit: "",
    }

    muon_g_factor: Narrow {
        name: "muon g factor",
        value: -2.0023318414,
        uncertainty: 1.2e-09,
        unit: "",
    }

    muon_mag_mom: Narrow {
        name: "muon mag. mom.",
        value: -4.49044786e-26,
        uncertainty: 1.6e-33,
        unit: "J T^-1",
    }

    muon_mag_mom_anomaly: Narrow {
        name: "muon mag. mom. anomaly",
        value: 0.00116592069,
        uncertainty: 6e-10,
        unit: "",
    }

    muon_mag_mom_to_Bohr_magneton_ratio: Narrow {
        name: "muon mag. mom. to Bohr magneton ratio",
        value: -0.00484197049,
        uncertainty: 1.2e-10,
        unit: "",
    }

    muon_mag_mom_to_nuclear_magneton_ratio: Narrow {
        name: "muon mag. mom. to nuclear magneton ratio",
        value: -8.89059705,
        uncertainty: 2.3e-07,
        unit: "",
    }

    muon_mass: Narrow {
        name: "muon mass",
        value: 1.8835313e-28,
        uncertainty: 1.1e-35,
        unit: "kg",
    }

    muon_mass_energy_equivalent: Narrow {
        name: "muon mass energy equivalent",
        value: 1.69283351e-11,
        uncertainty: 9.5e-19,
        unit: "J",
    }

    muon_mass_energy_equivalent_in_MeV: Narrow {
        name: "muon mass energy equivalent in MeV",
        value: 105.6583668,
        uncertainty: 3.8e-06,
        unit: "MeV",
    }

    muon_mass_in_u: Narrow {
        name: "muon mass in u",
        value: 0.1134289256,
        uncertainty: 2.9e-09,
        unit: "u",
    }

    muon_molar_mass: Narrow {
        name: "muon molar mass",
        value: 0.0001134289256,
        uncertainty: 2.9e-12,
        unit: "kg mol^-1",
    }

    muon_neutron_mass_ratio: Narrow {
        name: "muon-neutron mass ratio",
        value: 0.1124545167,
        uncertainty: 2.9e-09,
        unit: "",
    }

    muon_proton_mag_mom_ratio: Narrow {
        name: "muon-proton mag. mom. ratio",
        value: -3.183345137,
        uncertainty: 8.5e-08,
        unit: "",
    }

    muon_proton_mass_ratio: Narrow {
        name: "muon-proton mass ratio",
        value: 0.1126095261,
        uncertainty: 2.9e-09,
        unit: "",
    }

    muon_tau_mass_ratio: Narrow {
        name: "muon-tau mass ratio",
        value: 0.0594592,
        uncertainty: 9.7e-06,
        unit: "",
    }

    natural_unit_of_action: Narrow {
        name: "natural unit of action",
        value: 1.054571628e-34,
        uncertainty: 5.3e-42,
        unit: "J s",
    }

    natural_unit_of_action_in_eV_s: Narrow {
        name: "natural unit of action in eV s",
        value: 6.58211899e-16,
        uncertainty: 1.6e-23,
        unit: "eV s",
    }

    natural_unit_of_energy: Narrow {
        name: "natural unit of energy",
        value: 8.18710438e-14,
        uncertainty: 4.1e-21,
        unit: "J",
    }

    natural_unit_of_energy_in_MeV: Narrow {
        name: "natural unit of energy in MeV",
        value: 0.51099891,
        uncertainty: 1.3e-08,
        unit: "MeV",
    }

    natural_unit_of_length: Narrow {
        name: "natural unit of length",
        value: 3.8615926459e-13,
        uncertainty: 5.3e-22,
        unit: "m",
    }

    natural_unit_of_mass: Narrow {
        name: "natural unit of mass",
        value: 9.10938215e-31,
        uncertainty: 4.5e-38,
        unit: "kg",
    }

    natural_unit_of_momentum: Narrow {
        name: "natural unit of momentum",
        value: 2.73092406e-22,
        uncertainty: 1.4e-29,
        unit: "kg m s^-1",
    }

    natural_unit_of_momentum_in_MeV_c: Narrow {
        name: "natural unit of momentum in MeV/c",
        value: 0.51099891,
        uncertainty: 1.3e-08,
        unit: "MeV/c",
    }

    natural_unit_of_time: Narrow {
        name: "natural unit of time",
        value: 1.288088657e-21,
        uncertainty: 1.8e-30,
        unit: "s",
    }

    natural_unit_of_velocity: Narrow {
        name: "natural unit of velocity",
        value: 299792458.0,
        uncertainty: 0.0,
        unit: "m s^-1",
    }

    neutron_Compton_wavelength: Narrow {
        name: "neutron Compton wavelength",
        value: 1.3195908951e-15,
        uncertainty: 2e-24,
        unit: "m",
    }

    neutron_Compton_wavelength_over_2_pi: Narrow {
        name: "neutron Compton wavelength over 2 pi",
        value: 2.1001941382e-16,
        uncertainty: 3.1e-25,
        unit: "m",
    }

    neutron_electron_mag_mom_ratio: Narrow {
        name: "neutron-electron mag. mom. ratio",
        value: 0.00104066882,
        uncertainty: 2.5e-10,
        unit: "",
    }

    neutron_electron_mass_ratio: Narrow {
        name: "neutron-electron mass ratio",
        value: 1838.6836605,
        uncertainty: 1.1e-06,
        unit: "",
    }

    neutron_g_factor: Narrow {
        name: "neutron g factor",
        value: -3.82608545,
        uncertainty: 9e-07,
        unit: "",
    }

    neutron_gyromag_ratio: Narrow {
        name: "neutron gyromag. ratio",
        value: 183247185.0,
        uncertainty: 43.0,
        unit: "s^-1 T^-1",
    }

    neutron_gyromag_ratio_over_2_pi: Narrow {
        name: "neutron gyromag. ratio over 2 pi",
        value: 29.1646954,
        uncertainty: 6.9e-06,
        unit: "MHz T^-1",
    }

    neutron_mag_mom: Narrow {
        name: "neutron mag. mom.",
        value: -9.6623641e-27,
        uncertainty: 2.3e-33,
        unit: "J T^-1",
    }

    neutron_mag_mom_to_Bohr_magneton_ratio: Narrow {
        name: "neutron mag. mom. to Bohr magneton ratio",
        value: -0.00104187563,
        uncertainty: 2.5e-10,
        unit: "",
    }

    neutron_mag_mom_to_nuclear_magneton_ratio: Narrow {
        name: "neutron mag. mom. to nuclear magneton ratio",
        value: -1.91304273,
        uncertainty: 4.5e-07,
        unit: "",
    }

    neutron_mass: Narrow {
        name: "neutron mass",
        value: 1.674927211e-27,
        uncertainty: 8.4e-35,
        unit: "kg",
    }

    neutron_mass_energy_equivalent: Narrow {
        name: "neutron mass energy equivalent",
        value: 1.505349505e-10,
        uncertainty: 7.5e-18,
        unit: "J",
    }

    neutron_mass_energy_equivalent_in_MeV: Narrow {
        name: "neutron mass energy equivalent in MeV",
        value: 939.565346,
        uncertainty: 2.3e-05,
        unit: "MeV",
    }

    neutron_mass_in_u: Narrow {
        name: "neutron mass in u",
        value: 1.00866491597,
        uncertainty: 4.3e-10,
        unit: "u",
    }

    neutron_molar_mass: Narrow {
        name: "neutron molar mass",
        value: 0.00100866491597,
        uncertainty: 4.3e-13,
        unit: "kg mol^-1",
    }

    neutron_muon_mass_ratio: Narrow {
        name: "neutron-muon mass ratio",
        value: 8.89248409,
        uncertainty: 2.3e-07,
        unit: "",
    }

    neutron_proton_mag_mom_ratio: Narrow {
        name: "neutron-proton mag. mom. ratio",
        value: -0.68497934,
        uncertainty: 1.6e-07,
        unit: "",
    }

    neutron_proton_mass_ratio: Narrow {
        name: "neutron-proton mass ratio",
        value: 1.00137841918,
        uncertainty: 4.6e-10,
        unit: "",
    }

    neutron_tau_mass_ratio: Narrow {
        name: "neutron-tau mass ratio",
        value: 0.52874,
        uncertainty: 8.6e-05,
        unit: "",
    }

    neutron_to_shielded_proton_mag_mom_ratio: Narrow {
        name: "neutron to shielded proton mag. mom. ratio",
        value: -0.68499694,
        uncertainty: 1.6e-07,
        unit: "",
    }

    Newtonian_constant_of_gravitation: Narrow {
        name: "Newtonian constant of gravitation",
        value: 6.67428e-11,
        uncertainty: 6.7e-15,
        unit: "m^3 kg^-1 s^-2",
    }

    Newtonian_constant_of_gravitation_over_h_bar_c: Narrow {
        name: "Newtonian constant of gravitation over h-bar c",
        value: 6.70881e-39,
        uncertainty: 6.7e-43,
        unit: "(GeV/c^2)^-2",
    }

    nuclear_magneton: Narrow {
        name: "nuclear magneton",
        value: 5.05078324e-27,
        uncertainty: 1.3e-34,
        unit: "J T^-1",
    }

    nuclear_magneton_in_eV_T: Narrow {
        name: "nuclear magneton in eV/T",
        value: 3.1524512326e-08,
        uncertainty: 4.5e-17,
        unit: "eV T^-1",
    }

    nuclear_magneton_in_inverse_meters_per_tesla: Narrow {
        name: "nuclear magneton in inverse meters per tesla",
        value: 0.02542623616,
        uncertainty: 6.4e-10,
        unit: "m^-1 T^-1",
    }

    nuclear_magneton_in_K_T: Narrow {
        name: "nuclear magneton in K/T",
        value: 0.00036582637,
        uncertainty: 6.4e-10,
        unit: "K T^-1",
    }

    nuclear_magneton_in_MHz_T: Narrow {
        name: "nuclear magneton in MHz/T",
        value: 7.62259384,
        uncertainty: 1.9e-07,
        unit: "MHz T^-1",
    }

    Planck_constant: Narrow {
        name: "Planck constant",
        value: 6.62606896e-34,
        uncertainty: 3.3e-41,
        unit: "J s",
    }

    Planck_constant_in_eV_s: Narrow {
        name: "Planck constant in eV s",
        value: 4.13566733e-15,
        uncertainty: 1e-22,
        unit: "eV s",
    }

    Planck_constant_over_2_pi: Narrow {
        name: "Planck constant over 2 pi",
        value: 1.054571628e-34,
        uncertainty: 5.3e-42,
        unit: "J s",
    }

    Planck_constant_over_2_pi_in_eV_s: Narrow {
        name: "Planck constant over 2 pi in eV s",
        value: 6.58211899e-16,
        uncertainty: 1.6e-23,
        unit: "eV s",
    }

    Planck_constant_over_2_pi_times_c_in_MeV_fm: Narrow {
        name: "Planck constant over 2 pi times c in MeV fm",
        value: 197.3269631,
        uncertainty: 4.9e-06,
        unit: "MeV fm",
    }

    Planck_length: Narrow {
        name: "Planck length",
        value: 1.616252e-35,
        uncertainty: 8.1e-40,
        unit: "m",
    }

    Planck_mass: Narrow {
        name: "Planck mass",
        value: 2.17644e-08,
        uncertainty: 1.1e-12,
        unit: "kg",
    }

    Planck_mass_energy_equivalent_in_GeV: Narrow {
        name: "Planck mass energy equivalent in GeV",
        value: 1.220892e+19,
        uncertainty: 610000000000000.0,
        unit: "GeV",
    }

    Planck_temperature: Narrow {
        name: "Planck temperature",
        value: 1.416785e+32,
        uncertainty: 7.1e+27,
        unit: "K",
    }

    Planck_time: Narrow {
        name: "Planck time",
        value: 5.39124e-44,
        uncertainty: 2.7e-48,
        unit: "s",
    }

    proton_charge_to_mass_quotient: Narrow {
        name: "proton charge to mass quotient",
        value: 95788339.2,
        uncertainty: 2.4,
        unit: "C kg^-1",
    }

    proton_Compton_wavelength: Narrow {
        name: "proton Compton wavelength",
        value: 1.3214098446e-15,
        uncertainty: 1.9e-24,
        unit: "m",
    }

    proton_Compton_wavelength_over_2_pi: Narrow {
        name: "proton Compton wavelength over 2 pi",
        value: 2.1030890861e-16,
        uncertainty: 3e-25,
        unit: "m",
    }

    proton_electron_mass_ratio: Narrow {
        name: "proton-electron mass ratio",
        value: 1836.15267247,
        uncertainty: 8e-07,
        unit: "",
    }

    proton_g_factor: Narrow {
        name: "proton g factor",
        value: 5.585694713,
        uncertainty: 4.6e-08,
        unit: "",
    }

    proton_gyromag_ratio: Narrow {
        name: "proton gyromag. ratio",
        value: 267522209.9,
        uncertainty: 7.0,
        unit: "s^-1 T^-1",
    }

    proton_gyromag_ratio_over_2_pi: Narrow {
        name: "proton gyromag. ratio over 2 pi",
        value: 42.5774821,
        uncertainty: 1.1e-06,
        unit: "MHz T^-1",
    }

    proton_mag_mom: Narrow {
        name: "proton mag. mom.",
        value: 1.410606662e-26,
        uncertainty: 3.7e-34,
        unit: "J T^-1",
    }

    proton_mag_mom_to_Bohr_magneton_ratio: Narrow {
        name: "proton mag. mom. to Bohr magneton ratio",
        value: 0.001521032209,
        uncertainty: 1.2e-11,
        unit: "",
    }

    proton_mag_mom_to_nuclear_magneton_ratio: Narrow {
        name: "proton mag. mom. to nuclear magneton ratio",
        value: 2.792847356,
        uncertainty: 2.3e-08,
        unit: "",
    }

    proton_mag_shielding_correction: Narrow {
        name: "proton mag. shielding correction",
        value: 2.5694e-05,
        uncertainty: 1.4e-08,
        unit: "",
    }

    proton_mass: Narrow {
        name: "proton mass",
        value: 1.672621637e-27,
        uncertainty: 8.3e-35,
        unit: "kg",
    }

    proton_mass_energy_equivalent: Narrow {
        name: "proton mass energy equivalent",
        value: 1.503277359e-10,
        uncertainty: 7.5e-18,
        unit: "J",
    }

    proton_mass_energy_equivalent_in_MeV: Narrow {
        name: "proton mass energy equivalent in MeV",
        value: 938.272013,
        uncertainty: 2.3e-05,
        unit: "MeV",
    }

    proton_mass_in_u: Narrow {
        name: "proton mass in u",
        value: 1.00727646677,
        uncertainty: 1e-10,
        unit: "u",
    }

    proton_molar_mass: Narrow {
        name: "proton molar mass",
        value: 0.00100727646677,
        uncertainty: 1e-13,
        unit: "kg mol^-1",
    }

    proton_muon_mass_ratio: Narrow {
        name: "proton-muon mass ratio",
        value: 8.88024339,
        uncertainty: 2.3e-07,
        unit: "",
    }

    proton_neutron_mag_mom_ratio: Narrow {
        name: "proton-neutron mag. mom. ratio",
        value: -1.45989806,
        uncertainty: 3.4e-07,
        unit: "",
    }

    proton_neutron_mass_ratio: Narrow {
        name: "proton-neutron mass ratio",
        value: 0.99862347824,
        uncertainty: 4.6e-10,
        unit: "",
    }

    proton_rms_charge_radius: Narrow {
        name: "proton rms charge radius",
        value: 8.768e-16,
        uncertainty: 6.9e-18,
        unit: "m",
    }

    proton_tau_mass_ratio: Narrow {
        name: "proton-tau mass ratio",
        value: 0.528012,
        uncertainty: 8.6e-05,
        unit: "",
    }

    quantum_of_circulation: Narrow {
        name: "quantum of circulation",
        value: 0.00036369475199,
        uncertainty: 5e-13,
        unit: "m^2 s^-1",
    }

    quantum_of_circulation_times_2: Narrow {
        name: "quantum of circulation times 2",
        value: 0.000727389504,
        uncertainty: 1e-12,
        unit: "m^2 s^-1",
    }

    Rydberg_constant: Narrow {
        name: "Rydberg constant",
        value: 10973731.568527,
        uncertainty: 7.3e-05,
        unit: "m^-1",
    }

    Rydberg_constant_times_c_in_Hz: Narrow {
        name: "Rydberg constant times c in Hz",
        value: 3289841960361000.0,
        uncertainty: 22000.0,
        unit: "Hz",
    }

    Rydberg_constant_times_hc_in_eV: Narrow {
        name: "Rydberg constant times hc in eV",
        value: 13.60569193,
        uncertainty: 3.4e-07,
        unit: "eV",
    }

    Rydberg_constant_times_hc_in_J: Narrow {
        name: "Rydberg constant times hc in J",
        value: 2.17987197e-18,
        uncertainty: 1.1e-25,
        unit: "J",
    }

    Sackur_Tetrode_constant_1_K_100_kPa: Narrow {
        name: "Sackur-Tetrode constant (1 K, 100 kPa)",
        value: -1.1517047,
        uncertainty: 4.4e-06,
        unit: "",
    }

    Sackur_Tetrode_constant_1_K_101325_kPa: Narrow {
        name: "Sackur-Tetrode constant (1 K, 101.325 kPa)",
        value: -1.1648677,
        uncertainty: 4.4e-06,
        unit: "",
    }

    second_radiation_constant: Narrow {
        name: "second radiation constant",
        value: 0.014387752,
        uncertainty: 2.5e-08,
        unit: "m K",
    }

    shielded_helion_gyromag_ratio: Narrow {
        name: "shielded helion gyromag. ratio",
        value: 203789473.0,
        uncertainty: 5.6,
        unit: "s^-1 T^-1",
    }

    shielded_helion_gyromag_ratio_over_2_pi: Narrow {
        name: "shielded helion gyromag. ratio over 2 pi",
        value: 32.43410198,
        uncertainty: 9e-07,
        unit: "MHz T^-1",
    }

    shielded_helion_mag_mom: Narrow {
        name: "shielded helion mag. mom.",
        value: -1.074552982e-26,
        uncertainty: 3e-34,
        unit: "J T^-1",
    }

    shielded_helion_mag_mom_to_Bohr_magneton_ratio: Narrow {
        name: "shielded helion mag. mom. to Bohr magneton ratio",
        value: -0.001158671471,
        uncertainty: 1.4e-11,
        unit: "",
    }

    shielded_helion_mag_mom_to_nuclear_magneton_ratio: Narrow {
        name: "shielded helion mag. mom. to nuclear magneton ratio",
        value: -2.127497718,
        uncertainty: 2.5e-08,
        unit: "",
    }

    shielded_helion_to_proton_mag_mom_ratio: Narrow {
        name: "shielded helion to proton mag. mom. ratio",
        value: -0.761766558,
        uncertainty: 1.1e-08,
        unit: "",
    }

    shielded_helion_to_shielded_proton_mag_mom_ratio: Narrow {
        name: "shielded helion to shielded proton mag. mom. ratio",
        value: -0.7617861313,
        uncertainty: 3.3e-09,
        unit: "",
    }

    shielded_proton_gyromag_ratio: Narrow {
        name: "shielded proton gyromag. ratio",
        value: 267515336.2,
        uncertainty: 7.3,
        unit: "s^-1 T^-1",
    }

    shielded_proton_gyromag_ratio_over_2_pi: Narrow {
        name: "shielded proton gyromag. ratio over 2 pi",
        value: 42.5763881,
        uncertainty: 1.2e-06,
        unit: "MHz T^-1",
    }

    shielded_proton_mag_mom: Narrow {
        name: "shielded proton mag. mom.",
        value: 1.410570419e-26,
        uncertainty: 3.8e-34,
        unit: "J T^-1",
    }

    shielded_proton_mag_mom_to_Bohr_magneton_ratio: Narrow {
        name: "shielded proton mag. mom. to Bohr magneton ratio",
        value: 0.001520993128,
        uncertainty: 1.7e-11,
        unit: "",
    }

    shielded_proton_mag_mom_to_nuclear_magneton_ratio: Narrow {
        name: "shielded proton mag. mom. to nuclear magneton ratio",
        value: 2.792775598,
        uncertainty: 3e-08,
        unit: "",
    }

    speed_of_light_in_vacuum: Narrow {
        name: "speed of light in vacuum",
        value: 299792458.0,
        uncertainty: 0.0,
        unit: "m s^-1",
    }

    standard_acceleration_of_gravity: Narrow {
        name: "standard acceleration of gravity",
        value: 9.80665,
        uncertainty: 0.0,
        unit: "m s^-2",
    }

    standard_atmosphere: Narrow {
        name: "standard atmosphere",
        value: 101325.0,
        uncertainty: 0.0,
        unit: "Pa",
    }

    Stefan_Boltzmann_constant: Narrow {
        name: "Stefan-Boltzmann constant",
        value: 5.6704e-08,
        uncertainty: 4e-13,
        unit: "W m^-2 K^-4",
    }

    tau_Compton_wavelength: Narrow {
        name: "tau Compton wavelength",
        value: 6.9772e-16,
        uncertainty: 1.1e-19,
        unit: "m",
    }

    tau_Compton_wavelength_over_2_pi: Narrow {
        name: "tau Compton wavelength over 2 pi",
        value: 1.11046e-16,
        uncertainty: 1.8e-20,
        unit: "m",
    }

    tau_electron_mass_ratio: Narrow {
        name: "tau-electron mass ratio",
        value: 3477.48,
        uncertainty: 0.57,
        unit: "",
    }

    tau_mass: Narrow {
        name: "tau mass",
        value: 3.16777e-27,
        uncertainty: 5.2e-31,
        unit: "kg",
    }

    tau_mass_energy_equivalent: Narrow {
        name: "tau mass energy equivalent",
        value: 2.84705e-10,
        uncertainty: 4.6e-14,
        unit: "J",
    }

    tau_mass_energy_equivalent_in_MeV: Narrow {
        name: "tau mass energy equivalent in MeV",
        value: 1776.99,
        uncertainty: 0.29,
        unit: "MeV",
    }

    tau_mass_in_u: Narrow {
        name: "tau mass in u",
        value: 1.90768,
        uncertainty: 0.00031,
        unit: "u",
    }

    tau_molar_mass: Narrow {
        name: "tau molar mass",
        value: 0.00190768,
        uncertainty: 3.1e-07,
        unit: "kg mol^-1",
    }

    tau_muon_mass_ratio: Narrow {
        name: "tau-muon mass ratio",
        value: 16.8183,
        uncertainty: 0.0027,
        unit: "",
    }

    tau_neutron_mass_ratio: Narrow {
        name: "tau-neutron mass ratio",
        value: 1.89129,
        uncertainty: 0.00031,
        unit: "",
    }

    tau_proton_mass_ratio: Narrow {
        name: "tau-proton mass ratio",
        value: 1.8939,
        uncertainty: 0.00031,
        unit: "",
    }

    Thomson_cross_section: Narrow {
        name: "Thomson cross section",
        value: 6.652458558e-29,
        uncertainty: 2.7e-37,
        unit: "m^2",
    }

    triton_electron_mag_mom_ratio: Narrow {
        name: "triton-electron mag. mom. ratio",
        value: -0.001620514423,
        uncertainty: 2.1e-11,
        unit: "",
    }

    triton_electron_mass_ratio: Narrow {
        name: "triton-electron mass ratio",
        value: 5496.9215269,
        uncertainty: 5.1e-06,
        unit: "",
    }

    triton_g_factor: Narrow {
        name: "triton g factor",
        value: 5.957924896,
        uncertainty: 7.6e-08,
        unit: "",
    }

    triton_mag_mom: Narrow {
        name: "triton mag. mom.",
        value: 1.504609361e-26,
        uncertainty: 4.2e-34,
        unit: "J T^-1",
    }

    triton_mag_mom_to_Bohr_magneton_ratio: Narrow {
        name: "triton mag. mom. to Bohr magneton ratio",
        value: 0.001622393657,
        uncertainty: 2.1e-11,
        unit: "",
    }

    triton_mag_mom_to_nuclear_magneton_ratio: Narrow {
        name: "triton mag. mom. to nuclear magneton ratio",
        value: 2.978962448,
        uncertainty: 3.8e-08,
        unit: "",
    }

    triton_mass: Narrow {
        name: "triton mass",
        value: 5.00735588e-27,
        uncertainty: 2.5e-34,
        unit: "kg",
    }

    triton_mass_energy_equivalent: Narrow {
        name: "triton mass energy equivalent",
        value: 4.50038703e-10,
        uncertainty: 2.2e-17,
        unit: "J",
    }

    triton_mass_energy_equivalent_in_MeV: Narrow {
        name: "triton mass energy equivalent in MeV",
        value: 2808.920906,
        uncertainty: 7e-05,
        unit: "MeV",
    }

    triton_mass_in_u: Narrow {
        name: "triton mass in u",
        value: 3.0155007134,
        uncertainty: 2.5e-09,
        unit: "u",
    }

    triton_molar_mass: Narrow {
        name: "triton molar mass",
        value: 0.0030155007134,
        uncertainty: 2.5e-12,
        unit: "kg mol^-1",
    }

    triton_neutron_mag_mom_ratio: Narrow {
        name: "triton-neutron mag. mom. ratio",
        value: -1.55718553,
        uncertainty: 3.7e-07,
        unit: "",
    }

    triton_proton_mag_mom_ratio: Narrow {
        name: "triton-proton mag. mom. ratio",
        value: 1.066639908,
        uncertainty: 1e-08,
        unit: "",
    }

    triton_proton_mass_ratio: Narrow {
        name: "triton-proton mass ratio",
        value: 2.9937170309,
        uncertainty: 2.5e-09,
        unit: "",
    }

    unified_atomic_mass_unit: Narrow {
        name: "unified atomic mass unit",
        value: 1.660538782e-27,
        uncertainty: 8.3e-35,
        unit: "kg",
    }

    von_Klitzing_constant: Narrow {
        name: "von Klitzing constant",
        value: 25812.807557,
        uncertainty: 1.8e-05,
        unit: "ohm",
    }

    weak_mixing_angle: Narrow {
        name: "weak mixing angle",
        value: 0.22255,
        uncertainty: 0.00056,
        unit: "",
    }

    Wien_frequency_displacement_law_constant: Narrow {
        name: "Wien frequency displacement law constant",
        value: 58789330000.0,
        uncertainty: 100000.0,
        unit: "Hz K^-1",
    }

    Wien_wavelength_displacement_law_constant: Narrow {
        name: "Wien wavelength displacement law constant",
        value: 0.0028977685,
        uncertainty: 5.1e-09,
        unit: "m K",
    }
}
