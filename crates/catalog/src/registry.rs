use scene::DatasetKind;

use crate::config::DatasetConfig;
use crate::conjunctions::Conjunctions;
use crate::elset::Elset;
use crate::sgi::Sgi;
use crate::statevector::StateVector;

static CONJUNCTIONS: Conjunctions = Conjunctions;
static ELSET: Elset = Elset;
static SGI: Sgi = Sgi;
static STATE_VECTOR: StateVector = StateVector;

/// The process-wide config of `kind`.
pub fn config(kind: DatasetKind) -> &'static dyn DatasetConfig {
    match kind {
        DatasetKind::Conjunctions => &CONJUNCTIONS,
        DatasetKind::Elset => &ELSET,
        DatasetKind::Sgi => &SGI,
        DatasetKind::StateVector => &STATE_VECTOR,
    }
}

/// Every config, in `DatasetKind::ALL` order.
pub fn all() -> impl Iterator<Item = &'static dyn DatasetConfig> {
    DatasetKind::ALL.into_iter().map(config)
}
