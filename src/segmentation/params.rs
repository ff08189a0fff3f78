//! Learnt parameters of the boundary detection model.
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Casing observations for a word type, by position in the sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrthoContext(u8);

impl OrthoContext {
    pub const BEG_UC: u8 = 1 << 1;
    pub const MID_UC: u8 = 1 << 2;
    pub const UNK_UC: u8 = 1 << 3;
    pub const BEG_LC: u8 = 1 << 4;
    pub const MID_LC: u8 = 1 << 5;
    pub const UNK_LC: u8 = 1 << 6;

    pub const UC: u8 = Self::BEG_UC | Self::MID_UC | Self::UNK_UC;
    pub const LC: u8 = Self::BEG_LC | Self::MID_LC | Self::UNK_LC;

    pub fn insert(&mut self, flag: u8) {
        self.0 |= flag;
    }

    pub fn contains(&self, flag: u8) -> bool {
        self.0 & flag != 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PunktParameters {
    pub(crate) abbrev_types: HashSet<String>,
    pub(crate) sent_starters: HashSet<String>,
    pub(crate) ortho_context: HashMap<String, OrthoContext>,
}

impl PunktParameters {
    pub fn is_abbrev(&self, typ: &str) -> bool {
        self.abbrev_types.contains(typ)
    }

    pub fn is_sent_starter(&self, typ: &str) -> bool {
        self.sent_starters.contains(typ)
    }

    pub fn ortho_context(&self, typ: &str) -> OrthoContext {
        self.ortho_context.get(typ).copied().unwrap_or_default()
    }

    /// known abbreviations, sorted.
    pub fn abbrev_types(&self) -> Vec<&str> {
        let mut abbrevs: Vec<&str> = self.abbrev_types.iter().map(String::as_str).collect();
        abbrevs.sort_unstable();
        abbrevs
    }

    /// Load parameters previously dumped by [PunktParameters::to_writer].
    pub fn from_reader<R: std::io::Read>(r: R) -> Result<Self, Error> {
        Ok(serde_json::from_reader(r)?)
    }

    pub fn to_writer<W: std::io::Write>(&self, w: W) -> Result<(), Error> {
        Ok(serde_json::to_writer_pretty(w, self)?)
    }
}
