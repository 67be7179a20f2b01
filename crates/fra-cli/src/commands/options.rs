use anyhow::Result;
use fra_core::DatasetStore;

use crate::output::OutputWriter;

pub fn execute(store: &DatasetStore, output: &OutputWriter) -> Result<()> {
    let options = store.filter_options();

    if output.is_json() {
        return output.result(options);
    }

    output.section("Filter Options");
    let fields = [
        ("States", &options.states),
        ("Districts", &options.districts),
        ("Villages", &options.villages),
        ("FRA types", &options.fra_types),
        ("Statuses", &options.statuses),
        ("Tribal communities", &options.tribal_communities),
    ];
    for (label, values) in fields {
        let shown = if values.is_empty() { "-".to_string() } else { values.join(", ") };
        output.kv(label, shown);
    }

    Ok(())
}
