use comfy_table::Cell;

use crate::core::Job;
use crate::output::format::{
    TableOptions, create_styled_table, csv_escape, header_cell, json_string, print_title,
};

pub(crate) fn print_job(job: &Job, options: TableOptions) {
    print_title("Job added", None, options.use_color);
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Machine", options.use_color),
        header_cell("Product", options.use_color),
        header_cell("State", options.use_color),
        header_cell("Stage", options.use_color),
    ]);
    table.add_row(vec![
        Cell::new(&job.machine),
        Cell::new(&job.product),
        Cell::new(job.state),
        Cell::new(job.stage),
    ]);
    println!("{table}");
}

pub(crate) fn output_job_json(job: &Job) -> String {
    json_string(&serde_json::json!({
        "machine": job.machine,
        "product": job.product,
        "state": job.state,
        "stage": job.stage,
    }))
}

pub(crate) fn output_job_csv(job: &Job) -> String {
    format!(
        "machine,product,state,stage\n{},{},{},{}\n",
        csv_escape(&job.machine),
        csv_escape(&job.product),
        job.state,
        job.stage
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PowerState;
    use crate::core::types::Stage;

    fn job() -> Job {
        Job {
            machine: "Cutting MC/1".into(),
            product: "A-1825, rev 2".into(),
            state: PowerState::Off,
            stage: Stage::Finishing,
        }
    }

    #[test]
    fn json_uses_labels() {
        let json: serde_json::Value = serde_json::from_str(&output_job_json(&job())).unwrap();
        assert_eq!(json["state"], "OFF");
        assert_eq!(json["stage"], "Finishing");
    }

    #[test]
    fn csv_escapes_free_text_product() {
        assert_eq!(
            output_job_csv(&job()),
            "machine,product,state,stage\nCutting MC/1,\"A-1825, rev 2\",OFF,Finishing\n"
        );
    }
}
