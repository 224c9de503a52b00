//! The built-in rule table.
//!
//! Selector strings are site configuration, expected to rot as career sites
//! ship redesigns. Update them here; the extraction algorithms never change
//! with them. Patterns are ordered most specific first so overlapping
//! hostnames resolve deterministically.

use super::{FieldSelectors, SiteRule};

pub(super) fn default_rules() -> Vec<SiteRule> {
    vec![
        SiteRule::new("indeed.com")
            .with_selectors(
                FieldSelectors::new()
                    .title(&["h1"])
                    .company(&[".css-87uc0g"])
                    .location(&[".css-6z8o9s"])
                    .salary(&[".css-1rhg65m"])
                    .description(&["#jobDescriptionText"]),
            )
            .with_subtitle(&["[data-testid='jobsearch-JobInfoHeader-subtitle']"])
            .with_selected_card(
                FieldSelectors::new()
                    .title(&[".vjs-highlight .jobTitle"])
                    .company(&[".vjs-highlight .companyName"])
                    .location(&[".vjs-highlight .companyLocation"])
                    .salary(&[".vjs-highlight .salary-snippet"]),
            ),
        SiteRule::new("linkedin.com/jobs").with_selectors(
            FieldSelectors::new()
                .title(&[".top-card-layout__title"])
                .company(&[".topcard__org-name-link"])
                .location(&[".topcard__flavor--bullet"])
                .description(&[".description__text"]),
        ),
        SiteRule::new("glassdoor.com").with_selectors(
            FieldSelectors::new()
                .title(&["h1"])
                .company(&[".css-16nw49e"])
                .location(&[".css-56kyx5"])
                .description(&[".jobDescriptionContent"]),
        ),
        SiteRule::new("naukri.com").with_selectors(
            FieldSelectors::new()
                .title(&["h1.jd-header-title"])
                .company(&[".jd-header-comp-name"])
                .location(&[".jd-header-location"])
                .description(&[".dang-inner-html"]),
        ),
        SiteRule::new("monster.com").with_selectors(
            FieldSelectors::new()
                .title(&["h1[data-testid='svx-job-title']", "h1.title"])
                .company(&["[data-testid='svx-jobview-company-name']", ".company"])
                .location(&["[data-testid='svx-jobview-location']", ".location"])
                .salary(&["[data-testid='svx-jobview-salary']"])
                .description(&["[data-testid='svx-job-description-text']", ".job-description"]),
        ),
        SiteRule::new("ziprecruiter.com").with_selectors(
            FieldSelectors::new()
                .title(&["h1.job_title", "h1"])
                .company(&["[itemprop='name']", ".hiring_company_text"])
                .location(&["[itemprop='addressLocality']", ".location"])
                .salary(&[".salary_range"])
                .description(&[".job_description", ".jobDescriptionSection"]),
        ),
        SiteRule::new("dice.com").with_selectors(
            FieldSelectors::new()
                .title(&["h1[data-cy='jobTitle']", "h1.jobTitle"])
                .company(&["[data-cy='companyName']", ".employer"])
                .location(&["[data-cy='locationDetails']", ".location"])
                .salary(&[".salary"])
                .description(&["[data-cy='jobDescription']", ".job-description"]),
        ),
        SiteRule::new("simplyhired.com").with_selectors(
            FieldSelectors::new()
                .title(&["h1.viewjob-jobTitle", "h1"])
                .company(&[".viewjob-companyName", ".company"])
                .location(&[".viewjob-location", ".location"])
                .salary(&[".viewjob-salary"])
                .description(&[".viewjob-description", ".job-description"]),
        ),
        SiteRule::new("careerbuilder.com").with_selectors(
            FieldSelectors::new()
                .title(&["h1[data-testid='job-title']", ".job-title"])
                .company(&["[data-testid='company-name']", ".company-name"])
                .location(&["[data-testid='job-location']", ".job-location"])
                .salary(&["[data-testid='compensation']"])
                .description(&["[data-testid='job-description']", ".job-description"]),
        ),
        SiteRule::new("wellfound.com").with_selectors(wellfound_selectors()),
        SiteRule::new("angel.co").with_selectors(wellfound_selectors()),
    ]
}

fn wellfound_selectors() -> FieldSelectors {
    FieldSelectors::new()
        .title(&["h1[data-test='JobDetail-title']", "h1"])
        .company(&["[data-test='StartupLink-title']", ".company-name"])
        .location(&["[data-test='JobDetail-location']", ".location"])
        .salary(&["[data-test='JobDetail-salary']"])
        .description(&["[data-test='JobDetail-description']", ".job-description"])
}

/// Fallback for unrecognized career sites.
pub(super) fn generic_rule() -> SiteRule {
    SiteRule::new("").with_selectors(
        FieldSelectors::new()
            .title(&["h1"])
            .description(&["main", "article", ".job-description", "body"]),
    )
}
