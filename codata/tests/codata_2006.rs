//! Per-constant checks for the CODATA 2006 table.
//!
//! For every constant and every representation that covers it: value and
//! uncertainty are finite and equal the published literal rounded to that
//! representation, and the precision is finite, not negative, and equal to
//! `|uncertainty / value|` in that representation.

#![allow(non_snake_case)]

#[macro_use]
mod common;

use codata::codata_2006;

table_tests! {
    codata_2006;
    lattice_spacing_of_silicon: Narrow(1.920155762e-10, 5e-18),
    alpha_particle_electron_mass_ratio: Narrow(7294.2995365, 3.1e-06),
    alpha_particle_mass: Narrow(6.6446562e-27, 3.3e-34),
    alpha_particle_mass_energy_equivalent: Narrow(5.97191917e-10, 3e-17),
    alpha_particle_mass_energy_equivalent_in_MeV: Narrow(3727.379109, 9.3e-05),
    alpha_particle_mass_in_u: Narrow(4.001506179127, 6.2e-11),
    alpha_particle_molar_mass: Narrow(0.004001506179127, 6.2e-14),
    alpha_particle_proton_mass_ratio: Narrow(3.97259968951, 4.1e-10),
    Angstrom_star: Narrow(1.00001498e-10, 9e-17),
    atomic_mass_constant: Narrow(1.660538782e-27, 8.3e-35),
    atomic_mass_constant_energy_equivalent: Narrow(1.49241783e-10, 7.4e-18),
    atomic_mass_constant_energy_equivalent_in_MeV: Narrow(931.494028, 2.3e-05),
    atomic_mass_unit_electron_volt_relationship: Narrow(931494028.0, 23.0),
    atomic_mass_unit_hartree_relationship: Narrow(34231777.149, 0.049),
    atomic_mass_unit_hertz_relationship: Narrow(2.2523427369e+23, 320000000000000.0),
    atomic_mass_unit_inverse_meter_relationship: Narrow(751300667100000.0, 1100000.0),
    atomic_mass_unit_joule_relationship: Narrow(1.49241783e-10, 7.4e-18),
    atomic_mass_unit_kelvin_relationship: Narrow(10809527000000.0, 19000000.0),
    atomic_mass_unit_kilogram_relationship: Narrow(1.660538782e-27, 8.3e-35),
    atomic_unit_of_1st_hyperpolarizability: Wide(3.206361533e-53, 8.1e-61),
    atomic_unit_of_2nd_hyperpolarizability: Wide(6.23538095e-65, 3.1e-72),
    atomic_unit_of_action: Narrow(1.054571628e-34, 5.3e-42),
    atomic_unit_of_charge: Narrow(1.602176487e-19, 4e-27),
    atomic_unit_of_charge_density: Narrow(1081202300000.0, 27000.0),
    atomic_unit_of_current: Narrow(0.00662361763, 1.7e-10),
    atomic_unit_of_electric_dipole_mom: Narrow(8.47835281e-30, 2.1e-37),
    atomic_unit_of_electric_field: Narrow(514220632000.0, 13000.0),
    atomic_unit_of_electric_field_gradient: Narrow(9.71736166e+21, 240000000000000.0),
    atomic_unit_of_electric_polarizability: Narrow(1.6487772536e-41, 3.4e-50),
    atomic_unit_of_electric_potential: Narrow(27.21138386, 6.8e-07),
    atomic_unit_of_electric_quadrupole_mom: Narrow(4.48655107e-40, 1.1e-47),
    atomic_unit_of_energy: Narrow(4.35974394e-18, 2.2e-25),
    atomic_unit_of_force: Narrow(8.23872206e-08, 4.1e-15),
    atomic_unit_of_length: Narrow(5.2917720859e-11, 3.6e-20),
    atomic_unit_of_mag_dipole_mom: Narrow(1.85480183e-23, 4.6e-31),
    atomic_unit_of_mag_flux_density: Narrow(235051.7382, 0.0059),
    atomic_unit_of_magnetizability: Narrow(7.891036433e-29, 2.7e-37),
    atomic_unit_of_mass: Narrow(9.10938215e-31, 4.5e-38),
    atomic_unit_of_momentum: Narrow(1.992851565e-24, 9.9e-32),
    atomic_unit_of_permittivity: Narrow(1.112650056e-10, 0.0),
    atomic_unit_of_time: Narrow(2.418884326505e-17, 1.6e-12),
    atomic_unit_of_velocity: Narrow(2187691.2541, 0.0015),
    Avogadro_constant: Narrow(6.02214179e+23, 3e+16),
    Bohr_magneton: Narrow(9.27400915e-24, 2.3e-31),
    Bohr_magneton_in_eV_T: Narrow(5.7883817555e-05, 7.9e-14),
    Bohr_magneton_in_Hz_T: Narrow(13996246040.0, 350.0),
    Bohr_magneton_in_inverse_meters_per_tesla: Narrow(46.6864515, 1.2e-06),
    Bohr_magneton_in_K_T: Narrow(0.6717131, 1.2e-06),
    Bohr_radius: Narrow(5.2917720859e-11, 3.6e-20),
    Boltzmann_constant: Narrow(1.3806504e-23, 2.4e-29),
    Boltzmann_constant_in_eV_K: Narrow(8.617343e-05, 1.5e-10),
    Boltzmann_constant_in_Hz_K: Narrow(20836644000.0, 36000.0),
    Boltzmann_constant_in_inverse_meters_per_kelvin: Narrow(69.50356, 0.00012),
    characteristic_impedance_of_vacuum: Narrow(376.730313461, 0.0),
    classical_electron_radius: Narrow(2.8179402894e-15, 5.8e-24),
    Compton_wavelength: Narrow(2.4263102175e-12, 3.3e-21),
    Compton_wavelength_over_2_pi: Narrow(3.8615926459e-13, 5.3e-22),
    conductance_quantum: Narrow(7.7480917004e-05, 5.3e-14),
    conventional_value_of_Josephson_constant: Narrow(483597900000000.0, 0.0),
    conventional_value_of_von_Klitzing_constant: Narrow(25812.807, 0.0),
    Cu_x_unit: Narrow(1.00207699e-13, 2.8e-20),
    deuteron_electron_mag_mom_ratio: Narrow(-0.0004664345537, 3.9e-12),
    deuteron_electron_mass_ratio: Narrow(3670.4829654, 1.6e-06),
    deuteron_g_factor: Narrow(0.8574382308, 7.2e-09),
    deuteron_mag_mom: Narrow(4.33073465e-27, 1.1e-34),
    deuteron_mag_mom_to_Bohr_magneton_ratio: Narrow(0.0004669754556, 3.9e-12),
    deuteron_mag_mom_to_nuclear_magneton_ratio: Narrow(0.8574382308, 7.2e-09),
    deuteron_mass: Narrow(3.3435832e-27, 1.7e-34),
    deuteron_mass_energy_equivalent: Narrow(3.00506272e-10, 1.5e-17),
    deuteron_mass_energy_equivalent_in_MeV: Narrow(1875.612793, 4.7e-05),
    deuteron_mass_in_u: Narrow(2.013553212724, 7.8e-11),
    deuteron_molar_mass: Narrow(0.002013553212724, 7.8e-14),
    deuteron_neutron_mag_mom_ratio: Narrow(-0.44820652, 1.1e-07),
    deuteron_proton_mag_mom_ratio: Narrow(0.307012207, 2.4e-09),
    deuteron_proton_mass_ratio: Narrow(1.99900750108, 2.2e-10),
    deuteron_rms_charge_radius: Narrow(2.1402e-15, 2.8e-18),
    electric_constant: Narrow(8.854187817e-12, 0.0),
    electron_charge_to_mass_quotient: Narrow(-175882015000.0, 4400.0),
    electron_deuteron_mag_mom_ratio: Narrow(-2143.923498, 1.8e-05),
    electron_deuteron_mass_ratio: Narrow(0.00027244371093, 1.2e-13),
    electron_g_factor: Narrow(-2.0023193043622, 1.5e-12),
    electron_gyromag_ratio: Narrow(176085977000.0, 4400.0),
    electron_gyromag_ratio_over_2_pi: Narrow(28024.95364, 0.0007),
    electron_mag_mom: Narrow(-9.28476377e-24, 2.3e-31),
    electron_mag_mom_anomaly: Narrow(0.00115965218111, 7.4e-13),
    electron_mag_mom_to_Bohr_magneton_ratio: Narrow(-1.00115965218111, 7.4e-13),
    electron_mag_mom_to_nuclear_magneton_ratio: Narrow(-1838.28197092, 8e-07),
    electron_mass: Narrow(9.10938215e-31, 4.5e-38),
    electron_mass_energy_equivalent: Narrow(8.18710438e-14, 4.1e-21),
    electron_mass_energy_equivalent_in_MeV: Narrow(0.51099891, 1.3e-08),
    electron_mass_in_u: Narrow(0.00054857990943, 2.3e-13),
    electron_molar_mass: Narrow(5.4857990943e-07, 2.3e-16),
    electron_muon_mag_mom_ratio: Narrow(206.7669877, 5.2e-06),
    electron_muon_mass_ratio: Narrow(0.00483633171, 1.2e-10),
    electron_neutron_mag_mom_ratio: Narrow(960.9205, 0.00023),
    electron_neutron_mass_ratio: Narrow(0.00054386734459, 3.3e-13),
    electron_proton_mag_mom_ratio: Narrow(-658.2106848, 5.4e-06),
    electron_proton_mass_ratio: Narrow(0.00054461702177, 2.4e-13),
    electron_tau_mass_ratio: Narrow(0.000287564, 4.7e-08),
    electron_to_alpha_particle_mass_ratio: Narrow(0.00013709335557, 5.8e-14),
    electron_to_shielded_helion_mag_mom_ratio: Narrow(864.058257, 1e-05),
    electron_to_shielded_proton_mag_mom_ratio: Narrow(-658.2275971, 7.2e-06),
    electron_volt: Narrow(1.602176487e-19, 4e-27),
    electron_volt_atomic_mass_unit_relationship: Narrow(1.073544188e-09, 2.7e-17),
    electron_volt_hartree_relationship: Narrow(0.0367493254, 9.2e-10),
    electron_volt_hertz_relationship: Narrow(241798945400000.0, 6000000.0),
    electron_volt_inverse_meter_relationship: Narrow(806554.465, 0.02),
    electron_volt_joule_relationship: Narrow(1.602176487e-19, 4e-27),
    electron_volt_kelvin_relationship: Narrow(11604.505, 0.02),
    electron_volt_kilogram_relationship: Narrow(1.782661758e-36, 4.4e-44),
    elementary_charge: Narrow(1.602176487e-19, 4e-27),
    elementary_charge_over_h: Narrow(241798945400000.0, 6000000.0),
    Faraday_constant: Narrow(96485.3399, 0.0024),
    Faraday_constant_for_conventional_electric_current: Narrow(96485.3401, 0.0048),
    Fermi_coupling_constant: Narrow(1.16637e-05, 1e-10),
    fine_structure_constant: Narrow(0.0072973525376, 5e-12),
    first_radiation_constant: Narrow(3.74177118e-16, 1.9e-23),
    first_radiation_constant_for_spectral_radiance: Narrow(1.191042759e-16, 5.9e-24),
    hartree_atomic_mass_unit_relationship: Narrow(2.9212622986e-08, 4.2e-17),
    hartree_electron_volt_relationship: Narrow(27.21138386, 6.8e-07),
    Hartree_energy: Narrow(4.35974394e-18, 2.2e-25),
    Hartree_energy_in_eV: Narrow(27.21138386, 6.8e-07),
    hartree_hertz_relationship: Narrow(6579683920722000.0, 44000.0),
    hartree_inverse_meter_relationship: Narrow(21947463.13705, 0.00015),
    hartree_joule_relationship: Narrow(4.35974394e-18, 2.2e-25),
    hartree_kelvin_relationship: Narrow(315774.65, 0.55),
    hartree_kilogram_relationship: Narrow(4.85086934e-35, 2.4e-42),
    helion_electron_mass_ratio: Narrow(5495.8852765, 5.2e-06),
    helion_mass: Narrow(5.00641192e-27, 2.5e-34),
    helion_mass_energy_equivalent: Narrow(4.49953864e-10, 2.2e-17),
    helion_mass_energy_equivalent_in_MeV: Narrow(2808.391383, 7e-05),
    helion_mass_in_u: Narrow(3.0149322473, 2.6e-09),
    helion_molar_mass: Narrow(0.0030149322473, 2.6e-12),
    helion_proton_mass_ratio: Narrow(2.9931526713, 2.6e-09),
    hertz_atomic_mass_unit_relationship: Narrow(4.4398216294e-24, 6.4e-33),
    hertz_electron_volt_relationship: Narrow(4.13566733e-15, 1e-22),
    hertz_hartree_relationship: Narrow(1.519829846006e-16, 1e-27),
    hertz_inverse_meter_relationship: Narrow(3.335640951e-09, 0.0),
    hertz_joule_relationship: Narrow(6.62606896e-34, 3.3e-41),
    hertz_kelvin_relationship: Narrow(4.7992374e-11, 8.4e-17),
    hertz_kilogram_relationship: Wide(7.372496e-51, 3.7e-58),
    inverse_fine_structure_constant: Narrow(137.035999679, 9.4e-08),
    inverse_meter_atomic_mass_unit_relationship: Narrow(1.3310250394e-15, 1.9e-24),
    inverse_meter_electron_volt_relationship: Narrow(1.239841875e-06, 3.1e-14),
    inverse_meter_hartree_relationship: Narrow(4.55633525276e-08, 3e-19),
    inverse_meter_hertz_relationship: Narrow(299792458.0, 0.0),
    inverse_meter_joule_relationship: Narrow(1.986445501e-25, 9.9e-33),
    inverse_meter_kelvin_relationship: Narrow(0.014387752, 2.5e-08),
    inverse_meter_kilogram_relationship: Narrow(2.2102187e-42, 1.1e-49),
    inverse_of_conductance_quantum: Narrow(12906.4037787, 8.8e-06),
    Josephson_constant: Narrow(483597891000000.0, 12000000.0),
    joule_atomic_mass_unit_relationship: Narrow(6700536410.0, 330.0),
    joule_electron_volt_relationship: Narrow(6.24150965e+18, 160000000000.0),
    joule_hartree_relationship: Narrow(2.29371269e+17, 11000000000.0),
    joule_hertz_relationship: Narrow(1.50919045e+33, 7.5e+25),
    joule_inverse_meter_relationship: Narrow(5.03411747e+24, 2.5e+17),
    joule_kelvin_relationship: Narrow(7.242963e+22, 1.3e+17),
    joule_kilogram_relationship: Narrow(1.112650056e-17, 0.0),
    kelvin_atomic_mass_unit_relationship: Narrow(9.251098e-14, 1.6e-19),
    kelvin_electron_volt_relationship: Narrow(8.617343e-05, 1.5e-10),
    kelvin_hartree_relationship: Narrow(3.1668153e-06, 5.5e-12),
    kelvin_hertz_relationship: Narrow(20836644000.0, 36000.0),
    kelvin_inverse_meter_relationship: Narrow(69.50356, 0.00012),
    kelvin_joule_relationship: Narrow(1.3806504e-23, 2.4e-29),
    kelvin_kilogram_relationship: Narrow(1.5361807e-40, 2.7e-46),
    kilogram_atomic_mass_unit_relationship: Narrow(6.02214179e+26, 3e+19),
    kilogram_electron_volt_relationship: Narrow(5.60958912e+35, 1.4e+28),
    kilogram_hartree_relationship: Narrow(2.06148616e+34, 1e+27),
    kilogram_hertz_relationship: Wide(1.356392733e+50, 6.8e+42),
    kilogram_inverse_meter_relationship: Wide(4.52443915e+41, 2.3e+34),
    kilogram_joule_relationship: Narrow(8.987551787e+16, 0.0),
    kilogram_kelvin_relationship: Wide(6.509651e+39, 1.1e+34),
    lattice_parameter_of_silicon: Narrow(5.43102064e-10, 1.4e-17),
    Loschmidt_constant_27315_K_101325_kPa: Narrow(2.6867774e+25, 4.7e+19),
    mag_constant: Narrow(1.2566370614e-06, 0.0),
    mag_flux_quantum: Narrow(2.067833667e-15, 5.2e-23),
    molar_gas_constant: Narrow(8.314472, 1.5e-05),
    molar_mass_constant: Narrow(0.001, 0.0),
    molar_mass_of_carbon_12: Narrow(0.012, 0.0),
    molar_Planck_constant: Narrow(3.9903126821e-10, 5.7e-19),
    molar_Planck_constant_times_c: Narrow(0.11962656472, 1.7e-10),
    molar_volume_of_ideal_gas_27315_K_100_kPa: Narrow(0.022710981, 4e-08),
    molar_volume_of_ideal_gas_27315_K_101325_kPa: Narrow(0.022413996, 3.9e-08),
    molar_volume_of_silicon: Narrow(1.20588349e-05, 1.1e-12),
    Mo_x_unit: Narrow(1.00209955e-13, 5.3e-20),
    muon_Compton_wavelength: Narrow(1.173444104e-14, 3e-22),
    muon_Compton_wavelength_over_2_pi: Narrow(1.867594295e-15, 4.7e-23),
    muon_electron_mass_ratio: Narrow(206.7682823, 5.2e-06),
    muon_g_factor: Narrow(-2.0023318414, 1.2e-09),
    muon_mag_mom: Narrow(-4.49044786e-26, 1.6e-33),
    muon_mag_mom_anomaly: Narrow(0.00116592069, 6e-10),
    muon_mag_mom_to_Bohr_magneton_ratio: Narrow(-0.00484197049, 1.2e-10),
    muon_mag_mom_to_nuclear_magneton_ratio: Narrow(-8.89059705, 2.3e-07),
    muon_mass: Narrow(1.8835313e-28, 1.1e-35),
    muon_mass_energy_equivalent: Narrow(1.69283351e-11, 9.5e-19),
    muon_mass_energy_equivalent_in_MeV: Narrow(105.6583668, 3.8e-06),
    muon_mass_in_u: Narrow(0.1134289256, 2.9e-09),
    muon_molar_mass: Narrow(0.0001134289256, 2.9e-12),
    muon_neutron_mass_ratio: Narrow(0.1124545167, 2.9e-09),
    muon_proton_mag_mom_ratio: Narrow(-3.183345137, 8.5e-08),
    muon_proton_mass_ratio: Narrow(0.1126095261, 2.9e-09),
    muon_tau_mass_ratio: Narrow(0.0594592, 9.7e-06),
    natural_unit_of_action: Narrow(1.054571628e-34, 5.3e-42),
    natural_unit_of_action_in_eV_s: Narrow(6.58211899e-16, 1.6e-23),
    natural_unit_of_energy: Narrow(8.18710438e-14, 4.1e-21),
    natural_unit_of_energy_in_MeV: Narrow(0.51099891, 1.3e-08),
    natural_unit_of_length: Narrow(3.8615926459e-13, 5.3e-22),
    natural_unit_of_mass: Narrow(9.10938215e-31, 4.5e-38),
    natural_unit_of_momentum: Narrow(2.73092406e-22, 1.4e-29),
    natural_unit_of_momentum_in_MeV_c: Narrow(0.51099891, 1.3e-08),
    natural_unit_of_time: Narrow(1.288088657e-21, 1.8e-30),
    natural_unit_of_velocity: Narrow(299792458.0, 0.0),
    neutron_Compton_wavelength: Narrow(1.3195908951e-15, 2e-24),
    neutron_Compton_wavelength_over_2_pi: Narrow(2.1001941382e-16, 3.1e-25),
    neutron_electron_mag_mom_ratio: Narrow(0.00104066882, 2.5e-10),
    neutron_electron_mass_ratio: Narrow(1838.6836605, 1.1e-06),
    neutron_g_factor: Narrow(-3.82608545, 9e-07),
    neutron_gyromag_ratio: Narrow(183247185.0, 43.0),
    neutron_gyromag_ratio_over_2_pi: Narrow(29.1646954, 6.9e-06),
    neutron_mag_mom: Narrow(-9.6623641e-27, 2.3e-33),
    neutron_mag_mom_to_Bohr_magneton_ratio: Narrow(-0.00104187563, 2.5e-10),
    neutron_mag_mom_to_nuclear_magneton_ratio: Narrow(-1.91304273, 4.5e-07),
    neutron_mass: Narrow(1.674927211e-27, 8.4e-35),
    neutron_mass_energy_equivalent: Narrow(1.505349505e-10, 7.5e-18),
    neutron_mass_energy_equivalent_in_MeV: Narrow(939.565346, 2.3e-05),
    neutron_mass_in_u: Narrow(1.00866491597, 4.3e-10),
    neutron_molar_mass: Narrow(0.00100866491597, 4.3e-13),
    neutron_muon_mass_ratio: Narrow(8.89248409, 2.3e-07),
    neutron_proton_mag_mom_ratio: Narrow(-0.68497934, 1.6e-07),
    neutron_proton_mass_ratio: Narrow(1.00137841918, 4.6e-10),
    neutron_tau_mass_ratio: Narrow(0.52874, 8.6e-05),
    neutron_to_shielded_proton_mag_mom_ratio: Narrow(-0.68499694, 1.6e-07),
    Newtonian_constant_of_gravitation: Narrow(6.67428e-11, 6.7e-15),
    Newtonian_constant_of_gravitation_over_h_bar_c: Narrow(6.70881e-39, 6.7e-43),
    nuclear_magneton: Narrow(5.05078324e-27, 1.3e-34),
    nuclear_magneton_in_eV_T: Narrow(3.1524512326e-08, 4.5e-17),
    nuclear_magneton_in_inverse_meters_per_tesla: Narrow(0.02542623616, 6.4e-10),
    nuclear_magneton_in_K_T: Narrow(0.00036582637, 6.4e-10),
    nuclear_magneton_in_MHz_T: Narrow(7.62259384, 1.9e-07),
    Planck_constant: Narrow(6.62606896e-34, 3.3e-41),
    Planck_constant_in_eV_s: Narrow(4.13566733e-15, 1e-22),
    Planck_constant_over_2_pi: Narrow(1.054571628e-34, 5.3e-42),
    Planck_constant_over_2_pi_in_eV_s: Narrow(6.58211899e-16, 1.6e-23),
    Planck_constant_over_2_pi_times_c_in_MeV_fm: Narrow(197.3269631, 4.9e-06),
    Planck_length: Narrow(1.616252e-35, 8.1e-40),
    Planck_mass: Narrow(2.17644e-08, 1.1e-12),
    Planck_mass_energy_equivalent_in_GeV: Narrow(1.220892e+19, 610000000000000.0),
    Planck_temperature: Narrow(1.416785e+32, 7.1e+27),
    Planck_time: Narrow(5.39124e-44, 2.7e-48),
    proton_charge_to_mass_quotient: Narrow(95788339.2, 2.4),
    proton_Compton_wavelength: Narrow(1.3214098446e-15, 1.9e-24),
    proton_Compton_wavelength_over_2_pi: Narrow(2.1030890861e-16, 3e-25),
    proton_electron_mass_ratio: Narrow(1836.15267247, 8e-07),
    proton_g_factor: Narrow(5.585694713, 4.6e-08),
    proton_gyromag_ratio: Narrow(267522209.9, 7.0),
    proton_gyromag_ratio_over_2_pi: Narrow(42.5774821, 1.1e-06),
    proton_mag_mom: Narrow(1.410606662e-26, 3.7e-34),
    proton_mag_mom_to_Bohr_magneton_ratio: Narrow(0.001521032209, 1.2e-11),
    proton_mag_mom_to_nuclear_magneton_ratio: Narrow(2.792847356, 2.3e-08),
    proton_mag_shielding_correction: Narrow(2.5694e-05, 1.4e-08),
    proton_mass: Narrow(1.672621637e-27, 8.3e-35),
    proton_mass_energy_equivalent: Narrow(1.503277359e-10, 7.5e-18),
    proton_mass_energy_equivalent_in_MeV: Narrow(938.272013, 2.3e-05),
    proton_mass_in_u: Narrow(1.00727646677, 1e-10),
    proton_molar_mass: Narrow(0.00100727646677, 1e-13),
    proton_muon_mass_ratio: Narrow(8.88024339, 2.3e-07),
    proton_neutron_mag_mom_ratio: Narrow(-1.45989806, 3.4e-07),
    proton_neutron_mass_ratio: Narrow(0.99862347824, 4.6e-10),
    proton_rms_charge_radius: Narrow(8.768e-16, 6.9e-18),
    proton_tau_mass_ratio: Narrow(0.528012, 8.6e-05),
    quantum_of_circulation: Narrow(0.00036369475199, 5e-13),
    quantum_of_circulation_times_2: Narrow(0.000727389504, 1e-12),
    Rydberg_constant: Narrow(10973731.568527, 7.3e-05),
    Rydberg_constant_times_c_in_Hz: Narrow(3289841960361000.0, 22000.0),
    Rydberg_constant_times_hc_in_eV: Narrow(13.60569193, 3.4e-07),
    Rydberg_constant_times_hc_in_J: Narrow(2.17987197e-18, 1.1e-25),
    Sackur_Tetrode_constant_1_K_100_kPa: Narrow(-1.1517047, 4.4e-06),
    Sackur_Tetrode_constant_1_K_101325_kPa: Narrow(-1.1648677, 4.4e-06),
    second_radiation_constant: Narrow(0.014387752, 2.5e-08),
    shielded_helion_gyromag_ratio: Narrow(203789473.0, 5.6),
    shielded_helion_gyromag_ratio_over_2_pi: Narrow(32.43410198, 9e-07),
    shielded_helion_mag_mom: Narrow(-1.074552982e-26, 3e-34),
    shielded_helion_mag_mom_to_Bohr_magneton_ratio: Narrow(-0.001158671471, 1.4e-11),
    shielded_helion_mag_mom_to_nuclear_magneton_ratio: Narrow(-2.127497718, 2.5e-08),
    shielded_helion_to_proton_mag_mom_ratio: Narrow(-0.761766558, 1.1e-08),
    shielded_helion_to_shielded_proton_mag_mom_ratio: Narrow(-0.7617861313, 3.3e-09),
    shielded_proton_gyromag_ratio: Narrow(267515336.2, 7.3),
    shielded_proton_gyromag_ratio_over_2_pi: Narrow(42.5763881, 1.2e-06),
    shielded_proton_mag_mom: Narrow(1.410570419e-26, 3.8e-34),
    shielded_proton_mag_mom_to_Bohr_magneton_ratio: Narrow(0.001520993128, 1.7e-11),
    shielded_proton_mag_mom_to_nuclear_magneton_ratio: Narrow(2.792775598, 3e-08),
    speed_of_light_in_vacuum: Narrow(299792458.0, 0.0),
    standard_acceleration_of_gravity: Narrow(9.80665, 0.0),
    standard_atmosphere: Narrow(101325.0, 0.0),
    Stefan_Boltzmann_constant: Narrow(5.6704e-08, 4e-13),
    tau_Compton_wavelength: Narrow(6.9772e-16, 1.1e-19),
    tau_Compton_wavelength_over_2_pi: Narrow(1.11046e-16, 1.8e-20),
    tau_electron_mass_ratio: Narrow(3477.48, 0.57),
    tau_mass: Narrow(3.16777e-27, 5.2e-31),
    tau_mass_energy_equivalent: Narrow(2.84705e-10, 4.6e-14),
    tau_mass_energy_equivalent_in_MeV: Narrow(1776.99, 0.29),
    tau_mass_in_u: Narrow(1.90768, 0.00031),
    tau_molar_mass: Narrow(0.00190768, 3.1e-07),
    tau_muon_mass_ratio: Narrow(16.8183, 0.0027),
    tau_neutron_mass_ratio: Narrow(1.89129, 0.00031),
    tau_proton_mass_ratio: Narrow(1.8939, 0.00031),
    Thomson_cross_section: Narrow(6.652458558e-29, 2.7e-37),
    triton_electron_mag_mom_ratio: Narrow(-0.001620514423, 2.1e-11),
    triton_electron_mass_ratio: Narrow(5496.9215269, 5.1e-06),
    triton_g_factor: Narrow(5.957924896, 7.6e-08),
    triton_mag_mom: Narrow(1.504609361e-26, 4.2e-34),
    triton_mag_mom_to_Bohr_magneton_ratio: Narrow(0.001622393657, 2.1e-11),
    triton_mag_mom_to_nuclear_magneton_ratio: Narrow(2.978962448, 3.8e-08),
    triton_mass: Narrow(5.00735588e-27, 2.5e-34),
    triton_mass_energy_equivalent: Narrow(4.50038703e-10, 2.2e-17),
    triton_mass_energy_equivalent_in_MeV: Narrow(2808.920906, 7e-05),
    triton_mass_in_u: Narrow(3.0155007134, 2.5e-09),
    triton_molar_mass: Narrow(0.0030155007134, 2.5e-12),
    triton_neutron_mag_mom_ratio: Narrow(-1.55718553, 3.7e-07),
    triton_proton_mag_mom_ratio: Narrow(1.066639908, 1e-08),
    triton_proton_mass_ratio: Narrow(2.9937170309, 2.5e-09),
    unified_atomic_mass_unit: Narrow(1.660538782e-27, 8.3e-35),
    von_Klitzing_constant: Narrow(25812.807557, 1.8e-05),
    weak_mixing_angle: Narrow(0.22255, 0.00056),
    Wien_frequency_displacement_law_constant: Narrow(58789330000.0, 100000.0),
    Wien_wavelength_displacement_law_constant: Narrow(0.0028977685, 5.1e-09),
}
