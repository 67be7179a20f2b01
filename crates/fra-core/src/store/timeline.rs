use chrono::{Datelike, Local};

use super::index::{count_where, group_indices, sum_area};
use super::DatasetStore;
use crate::models::{MonthSummary, Timeline, YearSummary};

impl DatasetStore {
    /// Submission timeline, with the monthly breakdown for the current year
    pub fn timeline(&self) -> Timeline {
        self.timeline_for_year(Local::now().year())
    }

    /// Submission timeline with the monthly breakdown for `year`.
    ///
    /// Claims without a usable submission date are left out of both views.
    pub fn timeline_for_year(&self, year: i32) -> Timeline {
        let records = self.records();

        let yearly = group_indices(records, |r| r.submission_date.map(|d| d.year()))
            .into_iter()
            .map(|(y, indices)| {
                let summary = YearSummary {
                    claims_submitted: indices.len(),
                    total_area_ha: sum_area(records, &indices),
                    claims_approved: count_where(records, &indices, |r| r.is_approved()),
                };
                (y, summary)
            })
            .collect();

        let monthly = group_indices(records, |r| {
            r.submission_date.filter(|d| d.year() == year).map(|d| d.month())
        })
        .into_iter()
        .map(|(month, indices)| {
            let summary = MonthSummary {
                claims_submitted: indices.len(),
                total_area_ha: sum_area(records, &indices),
            };
            (month, summary)
        })
        .collect();

        Timeline { yearly, monthly }
    }
}
