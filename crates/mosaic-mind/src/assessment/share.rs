//! Shareable renditions of a finished profile: the share-card SVG, the share
//! copy text, and prefilled intent URLs for the social targets.
//!
//! Everything here is a pure function of the profile; the clipboard, canvas,
//! and window plumbing stays with the presentation collaborators.

use std::f64::consts::PI;

use super::domain::MosaicProfile;

const CARD_WIDTH: u32 = 1200;
const CARD_HEIGHT: u32 = 800;
const CHART_SIZE: f64 = 300.0;
const SITE_URL: &str = "mosaicmind.vercel.app";

/// Color of a plotted data point, by score tier.
fn tier_color(score: u8) -> &'static str {
    if score >= 70 {
        "#10b981"
    } else if score >= 30 {
        "#3b82f6"
    } else {
        "#ef4444"
    }
}

/// Renders the 1200x800 share-card SVG: branded header, radial chart, and
/// pattern-complexity footer.
pub fn share_card_svg(profile: &MosaicProfile) -> String {
    format!(
        r##"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="gradient" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" stop-color="#ef4444"/>
      <stop offset="50%" stop-color="#3b82f6"/>
      <stop offset="100%" stop-color="#10b981"/>
    </linearGradient>
    <style>
      .text {{ font-family: Arial, sans-serif; }}
      .title {{ font-size: 64px; font-weight: bold; }}
      .subtitle {{ font-size: 32px; }}
      .label {{ font-size: 28px; font-weight: 500; fill: #374151; }}
      .complexity {{ font-size: 36px; font-weight: bold; fill: #1f2937; }}
      .url {{ font-size: 24px; fill: #6b7280; }}
    </style>
  </defs>
  <rect width="100%" height="100%" fill="white"/>
  <rect width="100%" height="150" fill="#615FFF"/>
  <text x="600" y="80" text-anchor="middle" class="text title" fill="white">MosaicMind</text>
  <text x="600" y="130" text-anchor="middle" class="text subtitle" fill="white">Personality Assessment Results</text>
  <g transform="translate(600, 450)">
{chart}  </g>
  <text x="600" y="720" text-anchor="middle" class="text complexity">Pattern Complexity: {complexity}/100</text>
  <text x="600" y="770" text-anchor="middle" class="text url">{site}</text>
</svg>"##,
        width = CARD_WIDTH,
        height = CARD_HEIGHT,
        chart = radial_chart_svg(profile, CHART_SIZE),
        complexity = profile.visualization.complexity,
        site = SITE_URL,
    )
}

/// Radial chart fragment: grid circles, gradient-stroked polygon, tier-colored
/// data points, and uppercase category labels.
fn radial_chart_svg(profile: &MosaicProfile, size: f64) -> String {
    let scale = size / 60.0;
    let scores = &profile.scores;
    let count = scores.len().max(1) as f64;

    let mut svg = String::new();

    for grid_radius in [40.0, 30.0, 20.0, 10.0] {
        svg.push_str(&format!(
            "    <circle cx=\"0\" cy=\"0\" r=\"{r}\" fill=\"none\" stroke=\"#e5e7eb\" stroke-width=\"1\"/>\n",
            r = grid_radius * scale,
        ));
    }

    let points = scores
        .iter()
        .enumerate()
        .map(|(index, score)| {
            let (x, y) = point_at(index as f64, count, score.score, scale);
            format!("{x},{y}")
        })
        .collect::<Vec<_>>()
        .join(" ");

    svg.push_str(&format!(
        "    <polygon points=\"{points}\" fill=\"rgba(59, 130, 246, 0.1)\" stroke=\"url(#gradient)\" stroke-width=\"{w}\"/>\n",
        w = 2.0 * scale,
    ));

    for (index, score) in scores.iter().enumerate() {
        let (x, y) = point_at(index as f64, count, score.score, scale);
        svg.push_str(&format!(
            "    <circle cx=\"{x}\" cy=\"{y}\" r=\"{r}\" fill=\"{color}\" stroke=\"white\" stroke-width=\"{w}\"/>\n",
            r = 4.0 * scale,
            color = tier_color(score.score),
            w = 1.5 * scale,
        ));
    }

    for (index, score) in scores.iter().enumerate() {
        let angle = index as f64 * 2.0 * PI / count;
        let label_radius = 46.0 * scale;
        let x = label_radius * angle.cos();
        let y = label_radius * angle.sin();
        svg.push_str(&format!(
            "    <text x=\"{x}\" y=\"{y}\" text-anchor=\"{anchor}\" dominant-baseline=\"middle\" class=\"text label\">{label}</text>\n",
            anchor = label_anchor(angle),
            label = score.category.label().to_uppercase(),
        ));
    }

    svg.push_str(&format!(
        "    <circle cx=\"0\" cy=\"0\" r=\"{r}\" fill=\"#6b7280\" opacity=\"0.5\"/>\n",
        r = 2.0 * scale,
    ));

    svg
}

fn point_at(index: f64, count: f64, score: u8, scale: f64) -> (f64, f64) {
    let angle = index * 2.0 * PI / count;
    let radius = (10.0 + (f64::from(score) / 100.0) * 30.0) * scale;
    (radius * angle.cos(), radius * angle.sin())
}

fn label_anchor(angle: f64) -> &'static str {
    if angle.abs() < PI / 6.0 || angle.abs() > 5.0 * PI / 6.0 {
        "middle"
    } else if angle > 0.0 && angle < PI {
        "start"
    } else {
        "end"
    }
}

/// Share copy text headlining the complexity figure.
pub fn share_summary(profile: &MosaicProfile) -> String {
    format!(
        "Just discovered my unique personality mosaic with MosaicMind! \u{1F9E9}\n\nPattern Complexity: {}/100\n\nCheck out your personality pattern:",
        profile.visualization.complexity,
    )
}

/// Prefilled tweet intent URL.
pub fn twitter_share_url(profile: &MosaicProfile, page_url: &str) -> String {
    let hashtags = "MosaicMind,Personality,Psychology,SelfDiscovery";
    format!(
        "https://twitter.com/intent/tweet?text={text}&url={url}&hashtags={tags}",
        text = urlencoding::encode(&share_summary(profile)),
        url = urlencoding::encode(page_url),
        tags = urlencoding::encode(hashtags),
    )
}

/// Prefilled LinkedIn share-offsite URL.
pub fn linkedin_share_url(profile: &MosaicProfile, page_url: &str) -> String {
    let title = "My MosaicMind Personality Assessment";
    let summary = format!(
        "I just completed the MosaicMind personality assessment and discovered my unique personality pattern with {}/100 complexity.",
        profile.visualization.complexity,
    );
    format!(
        "https://www.linkedin.com/sharing/share-offsite/?url={url}&title={title}&summary={summary}&source={source}",
        url = urlencoding::encode(page_url),
        title = urlencoding::encode(title),
        summary = urlencoding::encode(&summary),
        source = urlencoding::encode("MosaicMind"),
    )
}
