use bugtrack_report::TemplateSummary;

#[derive(Debug)]
pub struct GenerateResult {
    pub summary: TemplateSummary,
    pub dry_run: bool,
}
