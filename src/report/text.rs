use crate::report::{
    EstimateSummary, ForecastSummary, SubjectsSummary, format_f32_2, format_f32_6,
};

pub fn render_forecast_text(summary: &ForecastSummary) -> String {
    let mut out = String::new();

    out.push_str("Per-Term SGPA Forecast\n");
    out.push_str("======================\n\n");

    out.push_str("1. Completed terms\n");
    out.push_str(&format!("Input source: {}\n", summary.input_source));
    out.push_str(&format!("Known terms: {}\n", summary.known_terms));
    let scores = summary
        .known_scores
        .iter()
        .map(|s| format_f32_2(*s))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!("Scores: {}\n", scores));
    out.push_str(&format!(
        "Current average: {}\n\n",
        format_f32_2(summary.current_average)
    ));

    out.push_str("2. Trend\n");
    out.push_str(&format!("Slope: {}\n", format_f32_6(summary.slope)));
    out.push_str(&format!("Direction: {}\n", summary.trend_label));
    out.push_str(&format!("{}\n\n", trend_statement(&summary.trend_label)));

    out.push_str("3. Predicted terms\n");
    for row in &summary.predictions {
        out.push_str(&format!(
            "Term {}: {}\n",
            row.term,
            format_f32_2(row.predicted_sgpa)
        ));
    }
    out.push_str(&format!(
        "Predicted average: {}\n\n",
        format_f32_2(summary.predicted_average)
    ));

    out.push_str("4. Risk assessment\n");
    out.push_str(&format!("Risk: {}\n", summary.risk_label));
    out.push_str(&format!("{}\n", summary.risk_message));

    if let Some(counts) = &summary.grade_counts {
        out.push_str("\n5. Grade distribution\n");
        for (bucket, count) in counts {
            out.push_str(&format!("{}: {}\n", bucket, count));
        }
    }

    out
}

pub fn render_subjects_text(summary: &SubjectsSummary) -> String {
    let mut out = String::new();

    out.push_str("Subject Performance Profile\n");
    out.push_str("===========================\n\n");

    out.push_str("1. Overview\n");
    out.push_str(&format!("Input source: {}\n", summary.input_source));
    out.push_str(&format!("Subjects analyzed: {}\n", summary.subjects.len()));
    if let Some(weakest) = summary.subjects.first() {
        out.push_str(&format!(
            "Weakest subject: {} ({})\n",
            weakest.course,
            format_f32_2(weakest.average)
        ));
    }
    out.push('\n');

    out.push_str("2. Subjects (weakest first)\n");
    for subject in &summary.subjects {
        out.push_str(&format!(
            "{}: average {}, trend {}, predicted next {}, consistency {}, attention {}, last grade {}\n",
            subject.course,
            format_f32_2(subject.average),
            subject.trend.label(),
            format_f32_2(subject.predicted_next),
            format_f32_2(subject.consistency),
            subject.attention.label(),
            subject.last_grade
        ));
    }

    out
}

pub fn render_estimate_text(summary: &EstimateSummary) -> String {
    let mut out = String::new();

    out.push_str("First-Term Estimate\n");
    out.push_str("===================\n\n");

    out.push_str("1. Inputs\n");
    out.push_str(&format!("Midterm: {} / 50\n", format_f32_2(summary.midterm)));
    out.push_str(&format!(
        "Attendance: {} / 100\n\n",
        format_f32_2(summary.attendance)
    ));

    out.push_str("2. Estimate\n");
    out.push_str(&format!(
        "Estimated SGPA: {}\n",
        format_f32_2(summary.estimated_sgpa)
    ));
    out.push_str(&format!(
        "Pass probability: {}%\n",
        summary.pass_probability
    ));
    out.push_str(&format!(
        "{}\n",
        estimate_statement(summary.pass_probability)
    ));

    out
}

fn trend_statement(label: &str) -> &'static str {
    match label {
        "Improving" => "Recent terms sit above the long-run fit; the projection carries a damped upward pull.",
        "Declining" => "Recent terms fall below the long-run fit; the projection carries a damped downward pull.",
        "First Term Only" => "Single completed term; the projection shrinks it toward the middle of the scale.",
        _ => "No material slope across completed terms; the projection leans on weighted recent performance.",
    }
}

fn estimate_statement(pass_probability: u8) -> &'static str {
    if pass_probability >= 85 {
        "On track to pass the first term comfortably."
    } else if pass_probability >= 55 {
        "Passing is likely but the margin is thin; steady effort needed."
    } else {
        "At risk of failing the first term; immediate support recommended."
    }
}
