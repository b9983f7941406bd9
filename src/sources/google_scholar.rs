//! Google Scholar publications of an author.

use super::SourceSpec;
use crate::extract::FieldRule;

/// Google Scholar view of the author profile
pub const GOOGLE_SCHOLAR: SourceSpec = SourceSpec {
    id: "google",
    name: "Google Scholar",
    profile_path: "authorverification/author/profile",
    view: "google",
    fields: &[
        FieldRule::text("title", "a"),
        FieldRule::labelled(
            "author",
            "td.text-lg-nowrap.text-nowrap small:nth-of-type(1)",
            "Author :",
        ),
        FieldRule::text("journal", "td.text-lg-nowrap.text-nowrap small:nth-of-type(2)"),
        FieldRule::text("year", "td:nth-of-type(2) strong"),
        FieldRule::text("citations", "td:nth-of-type(3) strong"),
        FieldRule::href("url", "a"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_rows;
    use scraper::Html;

    const PAGE: &str = r#"
    <div class="table-responsive">
      <table class="table">
        <tr>
          <td class="text-lg-nowrap text-nowrap">
            <a href="https://scholar.google.com/citations?view_op=view_citation&amp;citation_for_view=abc">Rice Yield Forecasting</a>
            <br><small>Author : A Sari, B Wijaya</small>
            <br><small>Jurnal Teknologi Pertanian 12 (2)</small>
          </td>
          <td><strong>2020</strong></td>
          <td><strong>14</strong> cited</td>
        </tr>
        <tr>
          <td class="text-lg-nowrap text-nowrap">
            <a href="https://scholar.google.com/citations?citation_for_view=def">Soil Moisture Sensing</a>
            <br><small>Prosiding Seminar Nasional</small>
          </td>
          <td><strong>2018</strong></td>
          <td><strong>3</strong> cited</td>
        </tr>
      </table>
    </div>"#;

    #[test]
    fn test_schema() {
        assert_eq!(
            GOOGLE_SCHOLAR.field_names().collect::<Vec<_>>(),
            ["title", "author", "journal", "year", "citations", "url"]
        );
    }

    #[test]
    fn test_extract_page() {
        let doc = Html::parse_document(PAGE);
        let table = extract_rows(GOOGLE_SCHOLAR.fields, &doc, "u").unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column("author").unwrap(), ["A Sari, B Wijaya", ""]);
        assert_eq!(
            table.column("journal").unwrap(),
            ["Jurnal Teknologi Pertanian 12 (2)", ""]
        );
        assert_eq!(table.column("year").unwrap(), ["2020", "2018"]);
        assert_eq!(table.column("citations").unwrap(), ["14", "3"]);
        assert_eq!(
            table.column("url").unwrap()[0],
            "https://scholar.google.com/citations?view_op=view_citation&citation_for_view=abc"
        );
    }
}
