use anyhow::Result;
use fra_core::DatasetStore;

use crate::output::OutputWriter;

pub fn execute(store: &DatasetStore, output: &OutputWriter) -> Result<()> {
    let analytics = store.analytics();

    if analytics.is_simplified() {
        output.warning("Precomputed analytics could not be serialized; showing claim counts");
    }

    if output.is_json() {
        output.result(analytics)
    } else {
        output.data(&analytics)
    }
}
