use std::fmt;

use jpegscan_common::read::ReadExt;

use super::Error;

/// Scan Header / Start of Scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sos {
    /// List of components (channels)
    pub components_specifications: Vec<ComponentSpecification>,
    /// Start of spectral or predictor selection
    pub ss: u8,
    /// End of spectral selection
    pub se: u8,
    /// Successive approximation bit position high
    pub ah: u8,
    /// Successive approximation bit position low or point transform
    pub al: u8,
}

impl Sos {
    /// Decode the segment data following the length field
    ///
    /// The number of components is taken from the data as is. Data too short
    /// for it result in [`Error::UnexpectedEof`].
    pub fn from_data(mut data: &[u8]) -> Result<Self, Error> {
        let ns = data.read_u8().map_err(|_| Error::UnexpectedEof)?;

        let mut components_specifications = Vec::with_capacity(ns.into());
        for _ in 0..ns {
            let buf: [u8; 2] = data.read_array().map_err(|_| Error::UnexpectedEof)?;
            components_specifications.push(ComponentSpecification::from_data(buf));
        }

        let ss = data.read_u8().map_err(|_| Error::UnexpectedEof)?;
        let se = data.read_u8().map_err(|_| Error::UnexpectedEof)?;
        let ah_al = data.read_u8().map_err(|_| Error::UnexpectedEof)?;
        let ah = ah_al >> 4;
        let al = ah_al & 0b1111;

        if !data.is_empty() {
            tracing::debug!("Ignoring {} trailing bytes in scan header", data.len());
        }

        Ok(Self {
            components_specifications,
            ss,
            se,
            ah,
            al,
        })
    }

    /// Number of components in scan
    pub fn ns(&self) -> usize {
        self.components_specifications.len()
    }
}

/// One line with the scan parameters followed by one line per component
impl fmt::Display for Sos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "SOS\tss={}\tse={}\tah={}\tal={}",
            self.ss, self.se, self.ah, self.al
        )?;
        for component in &self.components_specifications {
            writeln!(f, "{component}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSpecification {
    /// Scan component selector
    pub cs: u8,
    /// DC entropy coding table
    pub td: u8,
    /// AC entropy coding table
    pub ta: u8,
}

impl ComponentSpecification {
    pub fn from_data([cs, td_ta]: [u8; 2]) -> Self {
        let td = td_ta >> 4;
        let ta = td_ta & 0b1111;

        Self { cs, td, ta }
    }
}

impl fmt::Display for ComponentSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  #{} td={} ta={}", self.cs, self.td, self.ta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_components() {
        let data = hex::decode("0201000211003F00").unwrap();
        let sos = Sos::from_data(&data).unwrap();

        assert_eq!(sos.ns(), 2);
        assert_eq!((sos.ss, sos.se, sos.ah, sos.al), (0, 63, 0, 0));
        assert_eq!(
            sos.components_specifications,
            vec![
                ComponentSpecification {
                    cs: 1,
                    td: 0,
                    ta: 0
                },
                ComponentSpecification {
                    cs: 2,
                    td: 1,
                    ta: 1
                },
            ]
        );

        assert_eq!(
            sos.to_string(),
            "SOS\tss=0\tse=63\tah=0\tal=0\n  #1 td=0 ta=0\n  #2 td=1 ta=1\n"
        );
    }

    #[test]
    fn successive_approximation() {
        let data = hex::decode("010100010500").unwrap();
        let sos = Sos::from_data(&data).unwrap();

        assert_eq!((sos.ss, sos.se), (1, 5));
        assert_eq!((sos.ah, sos.al), (0, 0));

        let data = hex::decode("01031001052A").unwrap();
        let sos = Sos::from_data(&data).unwrap();
        assert_eq!(sos.components_specifications[0].cs, 3);
        assert_eq!(sos.components_specifications[0].td, 1);
        assert_eq!((sos.ss, sos.se, sos.ah, sos.al), (1, 5, 2, 10));
    }

    #[test]
    fn too_short() {
        // Declares three components but carries one
        let data = hex::decode("030100").unwrap();
        assert!(matches!(Sos::from_data(&data), Err(Error::UnexpectedEof)));

        assert!(matches!(Sos::from_data(&[]), Err(Error::UnexpectedEof)));
    }
}
