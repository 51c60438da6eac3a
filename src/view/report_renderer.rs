use ramhorns::Template;

use crate::collection::{Collection, Failure};
use crate::content::ContentError;

const REPORT_TPL: &str = "{{#failures}}{{{path}}}\n{{#errors}}  - {{{message}}}\n{{/errors}}{{/failures}}\
Checked {{checked}} {{posts_word}}: {{valid}} valid ({{drafts}} {{drafts_word}}), {{failed}} failed\n";

#[derive(ramhorns::Content)]
struct ReportPage {
    failures: Vec<ViewFailure>,
    checked: usize,
    posts_word: &'static str,
    valid: usize,
    drafts: usize,
    drafts_word: &'static str,
    failed: usize,
}

#[derive(ramhorns::Content)]
struct ViewFailure {
    path: String,
    errors: Vec<ViewError>,
}

#[derive(ramhorns::Content)]
struct ViewError {
    message: String,
}

pub struct ReportRenderer<'a> {
    pub template: Template<'a>,
}

impl ReportRenderer<'static> {
    pub fn new() -> Result<ReportRenderer<'static>, ramhorns::Error> {
        let template = Template::new(REPORT_TPL)?;
        Ok(ReportRenderer { template })
    }

    pub fn render(&self, collection: &Collection) -> String {
        let failures: Vec<ViewFailure> = collection.failures().iter().map(to_view).collect();
        let valid = collection.entries().len();
        let checked = valid + failures.len();
        let drafts = collection.draft_count();

        self.template.render(&ReportPage {
            checked,
            posts_word: plural(checked, "post", "posts"),
            valid,
            drafts,
            drafts_word: plural(drafts, "draft", "drafts"),
            failed: failures.len(),
            failures,
        })
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

fn to_view(failure: &Failure) -> ViewFailure {
    let errors = match failure.error {
        ContentError::Invalid(ref errors) => errors.errors().iter()
            .map(|e| ViewError { message: e.to_string() })
            .collect(),
        ref other => vec![ViewError { message: other.to_string() }],
    };

    ViewFailure {
        path: failure.path.display().to_string(),
        errors,
    }
}
