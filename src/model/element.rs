use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported element symbol: '{0}'")]
pub struct ParseElementError(String);

macro_rules! periodic_table {
    ($($symbol:ident = $z:literal => $mass:literal),+ $(,)?) => {
        /// Chemical element, discriminant equal to the atomic number.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum Element {
            $($symbol = $z),+
        }

        impl Element {
            /// Every element in atomic number order.
            pub const ALL: &'static [Element] = &[$(Element::$symbol),+];

            /// Standard atomic weight in g/mol.
            pub fn atomic_mass(&self) -> f64 {
                match self {
                    $(Element::$symbol => $mass),+
                }
            }

            pub fn symbol(&self) -> &'static str {
                match self {
                    $(Element::$symbol => stringify!($symbol)),+
                }
            }
        }
    };
}

periodic_table! {
    H = 1 => 1.008,
    He = 2 => 4.0026,
    Li = 3 => 6.94,
    Be = 4 => 9.0122,
    B = 5 => 10.81,
    C = 6 => 12.011,
    N = 7 => 14.007,
    O = 8 => 15.999,
    F = 9 => 18.998,
    Ne = 10 => 20.18,
    Na = 11 => 22.99,
    Mg = 12 => 24.305,
    Al = 13 => 26.982,
    Si = 14 => 28.085,
    P = 15 => 30.974,
    S = 16 => 32.06,
    Cl = 17 => 35.45,
    Ar = 18 => 39.948,
    K = 19 => 39.098,
    Ca = 20 => 40.078,
    Sc = 21 => 44.956,
    Ti = 22 => 47.867,
    V = 23 => 50.942,
    Cr = 24 => 51.996,
    Mn = 25 => 54.938,
    Fe = 26 => 55.845,
    Co = 27 => 58.933,
    Ni = 28 => 58.693,
    Cu = 29 => 63.546,
    Zn = 30 => 65.38,
    Ga = 31 => 69.723,
    Ge = 32 => 72.63,
    As = 33 => 74.922,
    Se = 34 => 78.971,
    Br = 35 => 79.904,
    Kr = 36 => 83.798,
    Rb = 37 => 85.468,
    Sr = 38 => 87.62,
    Y = 39 => 88.906,
    Zr = 40 => 91.224,
    Nb = 41 => 92.906,
    Mo = 42 => 95.96,
    Tc = 43 => 98.0,
    Ru = 44 => 101.07,
    Rh = 45 => 102.91,
    Pd = 46 => 106.42,
    Ag = 47 => 107.87,
    Cd = 48 => 112.41,
    In = 49 => 114.82,
    Sn = 50 => 118.71,
    Sb = 51 => 121.76,
    Te = 52 => 127.6,
    I = 53 => 126.9,
    Xe = 54 => 131.29,
    Cs = 55 => 132.91,
    Ba = 56 => 137.33,
    La = 57 => 138.91,
    Ce = 58 => 140.12,
    Pr = 59 => 140.91,
    Nd = 60 => 144.24,
    Pm = 61 => 145.0,
    Sm = 62 => 150.36,
    Eu = 63 => 151.96,
    Gd = 64 => 157.25,
    Tb = 65 => 158.93,
    Dy = 66 => 162.5,
    Ho = 67 => 164.93,
    Er = 68 => 167.26,
    Tm = 69 => 168.93,
    Yb = 70 => 173.05,
    Lu = 71 => 174.97,
    Hf = 72 => 178.49,
    Ta = 73 => 180.95,
    W = 74 => 183.84,
    Re = 75 => 186.21,
    Os = 76 => 190.23,
    Ir = 77 => 192.22,
    Pt = 78 => 195.08,
    Au = 79 => 196.97,
    Hg = 80 => 200.59,
    Tl = 81 => 204.38,
    Pb = 82 => 207.2,
    Bi = 83 => 208.98,
    Po = 84 => 209.0,
    At = 85 => 210.0,
    Rn = 86 => 222.0,
    Fr = 87 => 223.0,
    Ra = 88 => 226.0,
    Ac = 89 => 227.0,
    Th = 90 => 232.04,
    Pa = 91 => 231.04,
    U = 92 => 238.03,
    Np = 93 => 237.0,
    Pu = 94 => 244.0,
    Am = 95 => 243.0,
    Cm = 96 => 247.0,
    Bk = 97 => 247.0,
    Cf = 98 => 251.0,
    Es = 99 => 252.0,
    Fm = 100 => 257.0,
    Md = 101 => 258.0,
    No = 102 => 259.0,
    Lr = 103 => 262.0,
    Rf = 104 => 267.0,
    Db = 105 => 270.0,
    Sg = 106 => 271.0,
    Bh = 107 => 270.0,
    Hs = 108 => 277.0,
    Mt = 109 => 276.0,
    Ds = 110 => 281.0,
    Rg = 111 => 280.0,
    Cn = 112 => 285.0,
    Nh = 113 => 284.0,
    Fl = 114 => 289.0,
    Mc = 115 => 288.0,
    Lv = 116 => 293.0,
    Ts = 117 => 294.0,
    Og = 118 => 294.0,
}

impl Element {
    #[inline]
    pub fn atomic_number(&self) -> u8 {
        *self as u8
    }

    pub fn from_atomic_number(z: u8) -> Option<Self> {
        Self::ALL.get(usize::from(z).checked_sub(1)?).copied()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.symbol() == s)
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_dense_and_ordered() {
        assert_eq!(Element::ALL.len(), 118);
        for (i, el) in Element::ALL.iter().enumerate() {
            assert_eq!(usize::from(el.atomic_number()), i + 1);
        }
    }

    #[test]
    fn from_str_is_case_sensitive() {
        assert_eq!("Cl".parse::<Element>().unwrap(), Element::Cl);
        assert_eq!("Og".parse::<Element>().unwrap(), Element::Og);
        let err = "cl".parse::<Element>().unwrap_err();
        assert_eq!(err.to_string(), "invalid or unsupported element symbol: 'cl'");
    }

    #[test]
    fn from_atomic_number_bounds() {
        assert_eq!(Element::from_atomic_number(0), None);
        assert_eq!(Element::from_atomic_number(6), Some(Element::C));
        assert_eq!(Element::from_atomic_number(118), Some(Element::Og));
        assert_eq!(Element::from_atomic_number(119), None);
    }

    #[test]
    fn symbol_and_mass() {
        assert_eq!(Element::Na.to_string(), "Na");
        assert!((Element::C.atomic_mass() - 12.011).abs() < 1e-9);
        assert!((Element::Fe.atomic_mass() - 55.845).abs() < 1e-9);
    }
}
