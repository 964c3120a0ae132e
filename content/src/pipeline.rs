//! ETL delivery-flow stages and the Excel/VBA code snippets.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PipelineStage {
    pub name: &'static str,
    pub detail: &'static str,
}

pub const PIPELINE: [PipelineStage; 6] = [
    PipelineStage { name: "Sources", detail: "CSV / SQL / APIs" },
    PipelineStage { name: "Ingest", detail: "Validation + schema checks" },
    PipelineStage { name: "Transform", detail: "SQL + Python (dbt-style)" },
    PipelineStage { name: "Model", detail: "Forecasting + metrics" },
    PipelineStage { name: "Serve", detail: "BI + extracts" },
    PipelineStage { name: "Monitor", detail: "Quality + alerts" },
];

/// Whether an arrow is drawn after the stage at `index`.
#[must_use]
pub fn has_arrow_after(index: usize) -> bool {
    index + 1 < PIPELINE.len()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub title: &'static str,
    pub code: &'static str,
}

pub const EXCEL_SNIPPET: Snippet = Snippet {
    title: "Example Excel formula (LET + SUMIFS)",
    code: r#"=LET(
  _tbl, Table1,
  _region, [@Region],
  _sum, SUMIFS(_tbl[Value], _tbl[Region], _region, _tbl[Status], "Active"),
  IFERROR(_sum, 0)
)"#,
};

pub const VBA_SNIPPET: Snippet = Snippet {
    title: "Example VBA macro (refresh + export)",
    code: r#"Option Explicit

Sub RefreshAllAndExport()
    ' Example: refresh pivots and export a clean report
    Application.ScreenUpdating = False

    ThisWorkbook.RefreshAll
    Application.CalculateUntilAsyncQueriesDone

    Sheets("Report").ExportAsFixedFormat _
        Type:=xlTypePDF, _
        Filename:=ThisWorkbook.Path & "\Weekly_Report.pdf"

    Application.ScreenUpdating = True
End Sub"#,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_between_stages_but_not_after_last() {
        let arrows = (0..PIPELINE.len()).filter(|i| has_arrow_after(*i)).count();
        assert_eq!(arrows, PIPELINE.len() - 1);
        assert!(!has_arrow_after(PIPELINE.len() - 1));
    }

    #[test]
    fn vba_export_path_keeps_single_backslash() {
        assert!(VBA_SNIPPET.code.contains(r#"ThisWorkbook.Path & "\Weekly_Report.pdf""#));
    }
}
