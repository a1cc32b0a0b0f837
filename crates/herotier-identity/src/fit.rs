//! Scoring a hero against a team identity.
//!
//! # Scoring
//!
//! Terms are independent and additive. The result is not clamped and can be negative.
//!
//! | Term                                    | Points        | Reason                          |
//! |-----------------------------------------|---------------|---------------------------------|
//! | tempo equals team tempo                 | +20           | `Matches tempo`                 |
//! | playstyle primary equals team primary   | +20           | `Matches playstyle`             |
//! | any playstyle subtype in team subtypes  | +5            | `Matches playstyle subtype`     |
//! | formation equals team formation         | +10           | `Matches formation`             |
//! | pressure among team pressures           | +10           | `Matches pressure type`         |
//! | k provides found in team unmet needs    | +10 + 5k      | `Fulfills team need: X` (each)  |
//! | a dislike names team tempo/primary/formation | -10 once | `Conflicts with team identity`  |
//!
//! A team without a tempo, primary playstyle or formation neither rewards nor reports that
//! term. Otherwise a miss is reported as `Tempo mismatch`, `Playstyle mismatch` or
//! `Formation conflict`.

use serde::{Serialize, Serializer};

use crate::{hero::HeroIdentity, team::TeamIdentity};

pub const TEMPO_MATCH_POINTS: i32 = 20;
pub const PLAYSTYLE_MATCH_POINTS: i32 = 20;
pub const SUBTYPE_MATCH_POINTS: i32 = 5;
pub const FORMATION_MATCH_POINTS: i32 = 10;
pub const PRESSURE_MATCH_POINTS: i32 = 10;
pub const NEED_FULFILLED_BASE_POINTS: i32 = 10;
pub const NEED_FULFILLED_POINTS: i32 = 5;
pub const IDENTITY_CONFLICT_PENALTY: i32 = -10;

/// One line of explanation for a fit score.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum FitReason {
    #[display("Matches tempo")]
    MatchesTempo,
    #[display("Tempo mismatch")]
    TempoMismatch,
    #[display("Matches playstyle")]
    MatchesPlaystyle,
    #[display("Playstyle mismatch")]
    PlaystyleMismatch,
    #[display("Matches playstyle subtype")]
    MatchesPlaystyleSubtype,
    #[display("Matches formation")]
    MatchesFormation,
    #[display("Formation conflict")]
    FormationConflict,
    #[display("Matches pressure type")]
    MatchesPressureType,
    #[display("Fulfills team need: {_0}")]
    FulfillsTeamNeed(String),
    #[display("Conflicts with team identity")]
    ConflictsWithIdentity,
}

impl Serialize for FitReason {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FitScore {
    pub score: i32,
    pub reasons: Vec<FitReason>,
}

impl FitScore {
    fn add(&mut self, points: i32, reason: FitReason) {
        self.score += points;
        self.reasons.push(reason);
    }
}

fn match_term<T: PartialEq>(
    fit: &mut FitScore,
    team_value: Option<T>,
    hero_value: T,
    points: i32,
    matched: FitReason,
    missed: FitReason,
) {
    match team_value {
        Some(value) if value == hero_value => fit.add(points, matched),
        Some(_) => fit.reasons.push(missed),
        None => {}
    }
}

/// Scores `hero` against `team`.
///
/// # Examples
///
/// ```
/// use herotier_identity::{fit::score_hero_fit, hero::HeroIdentity, team::initialize_team};
///
/// let ana: HeroIdentity = serde_json::from_value(serde_json::json!({
///     "id": "ana", "name": "Ana", "role": "support", "tempo": "slow",
///     "playstyle": { "primary": "poke" }, "formation": "tight",
///     "pressure": "sustain", "win_condition": "attrition",
/// })).unwrap();
///
/// // An empty team has nothing to match or conflict with.
/// let fit = score_hero_fit(&initialize_team(), &ana);
/// assert_eq!(fit.score, 0);
/// assert!(fit.reasons.is_empty());
/// ```
#[must_use]
pub fn score_hero_fit(team: &TeamIdentity<'_>, hero: &HeroIdentity) -> FitScore {
    let mut fit = FitScore::default();

    match_term(
        &mut fit,
        team.tempo,
        hero.tempo,
        TEMPO_MATCH_POINTS,
        FitReason::MatchesTempo,
        FitReason::TempoMismatch,
    );
    match_term(
        &mut fit,
        team.playstyle.primary,
        hero.playstyle.primary,
        PLAYSTYLE_MATCH_POINTS,
        FitReason::MatchesPlaystyle,
        FitReason::PlaystyleMismatch,
    );

    if hero
        .playstyle
        .subtypes
        .iter()
        .any(|s| team.playstyle.subtypes.contains(s))
    {
        fit.add(SUBTYPE_MATCH_POINTS, FitReason::MatchesPlaystyleSubtype);
    }

    match_term(
        &mut fit,
        team.formation,
        hero.formation,
        FORMATION_MATCH_POINTS,
        FitReason::MatchesFormation,
        FitReason::FormationConflict,
    );

    if team.pressure.contains(&hero.pressure) {
        fit.add(PRESSURE_MATCH_POINTS, FitReason::MatchesPressureType);
    }

    let fulfilled = hero
        .provides
        .iter()
        .filter(|p| team.unmet_needs.contains(*p))
        .collect::<Vec<_>>();
    if !fulfilled.is_empty() {
        #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let matches = fulfilled.len() as i32;
        fit.score += NEED_FULFILLED_BASE_POINTS + NEED_FULFILLED_POINTS * matches;
        fit.reasons.extend(
            fulfilled
                .into_iter()
                .map(|need| FitReason::FulfillsTeamNeed(need.clone())),
        );
    }

    let identity = [
        team.tempo.map(|t| t.as_str()),
        team.playstyle.primary.map(|p| p.as_str()),
        team.formation.map(|f| f.as_str()),
    ];
    let conflicts = hero
        .dislikes
        .iter()
        .any(|dislike| identity.contains(&Some(dislike.as_str())));
    if conflicts {
        fit.add(IDENTITY_CONFLICT_PENALTY, FitReason::ConflictsWithIdentity);
    }

    fit
}

/// A candidate and its fit against a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroFit<'a> {
    #[serde(serialize_with = "serialize_hero_id")]
    pub hero: &'a HeroIdentity,
    #[serde(flatten)]
    pub fit: FitScore,
}

pub(crate) fn serialize_hero_id<S>(hero: &&HeroIdentity, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&hero.id)
}

/// Scores every candidate against `team`, in candidate order.
#[must_use]
pub fn get_hero_fits<'a, I>(team: &TeamIdentity<'_>, candidates: I) -> Vec<HeroFit<'a>>
where
    I: IntoIterator<Item = &'a HeroIdentity>,
{
    candidates
        .into_iter()
        .map(|hero| HeroFit {
            hero,
            fit: score_hero_fit(team, hero),
        })
        .collect()
}

/// Candidates whose id is not already seated on `team`.
#[must_use]
pub fn filter_available_heroes<'a, I>(team: &TeamIdentity<'_>, candidates: I) -> Vec<&'a HeroIdentity>
where
    I: IntoIterator<Item = &'a HeroIdentity>,
{
    candidates
        .into_iter()
        .filter(|hero| !team.is_seated(&hero.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fixtures,
        team::{TeamIdentity, add_hero_to_team, initialize_team},
    };

    fn has(fit: &FitScore, reason: &str) -> bool {
        fit.reasons.iter().any(|r| r.to_string() == reason)
    }

    #[test]
    fn test_matching_hero_scores_high() {
        let ball = fixtures::wrecking_ball();
        let tracer = fixtures::tracer();
        let team = add_hero_to_team(&initialize_team(), &ball);

        let fit = score_hero_fit(&team, &tracer);
        // tempo 20, playstyle 20, subtype 5, formation 10, needs 10 + 5 * 2
        assert_eq!(fit.score, 75);
        assert!(has(&fit, "Matches tempo"));
        assert!(has(&fit, "Fulfills team need: follow-up"));
        assert!(has(&fit, "Fulfills team need: flank-pressure"));
        assert!(!has(&fit, "Matches pressure type"));
    }

    #[test]
    fn test_conflicting_hero_scores_low() {
        let ball = fixtures::wrecking_ball();
        let bastion = fixtures::bastion();
        let team = add_hero_to_team(&initialize_team(), &ball);

        let fit = score_hero_fit(&team, &bastion);
        assert_eq!(fit.score, 0);
        assert_eq!(
            fit.reasons,
            [
                FitReason::TempoMismatch,
                FitReason::PlaystyleMismatch,
                FitReason::FormationConflict
            ]
        );
    }

    #[test]
    fn test_literal_total_of_eighty() {
        let ball = fixtures::wrecking_ball();
        let mut candidate = fixtures::tracer();
        candidate.playstyle.subtypes.clear();
        candidate.dislikes.clear();
        let team = add_hero_to_team(&initialize_team(), &ball);

        // matches tempo, playstyle and formation and provides both of Ball's unmet needs;
        // burst pressure is not among the team's
        let fit = score_hero_fit(&team, &candidate);
        assert_eq!(fit.score, 20 + 20 + 10 + (10 + 5 * 2));

        candidate.pressure = ball.pressure;
        let fit = score_hero_fit(&team, &candidate);
        assert_eq!(fit.score, 20 + 20 + 10 + 10 + (10 + 5 * 2));
        assert_eq!(fit.score, 80);
    }

    #[test]
    fn test_dislike_penalty_applies_once() {
        let weirdman = fixtures::weirdman();
        let tracer = fixtures::tracer();
        let team = add_hero_to_team(&initialize_team(), &tracer);

        // dislikes "fast" and "split" both name the team identity; "mid-fight" is a win condition
        let fit = score_hero_fit(&team, &weirdman);
        assert_eq!(fit.score, -10);
        assert_eq!(
            fit.reasons.iter().filter(|r| **r == FitReason::ConflictsWithIdentity).count(),
            1
        );
        assert!(has(&fit, "Tempo mismatch"));
    }

    #[test]
    fn test_third_hero_on_dive_team() {
        let ball = fixtures::wrecking_ball();
        let tracer = fixtures::tracer();
        let sombra = fixtures::sombra();
        let bastion = fixtures::bastion();
        let team = TeamIdentity::from_slots([Some(&ball), Some(&tracer)]);

        let fit = score_hero_fit(&team, &sombra);
        assert!(fit.score > 70);
        assert!(has(&fit, "Matches playstyle"));
        assert!(has(&fit, "Fulfills team need: support-cover"));

        let fit = score_hero_fit(&team, &bastion);
        assert!(fit.score < 40);
        assert!(has(&fit, "Tempo mismatch"));
    }

    #[test]
    fn test_fits_and_availability() {
        let tracer = fixtures::tracer();
        let bastion = fixtures::bastion();
        let all = [tracer.clone(), bastion.clone()];
        let team = add_hero_to_team(&initialize_team(), &tracer);

        let available = filter_available_heroes(&team, &all);
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, "bastion");

        let ball = fixtures::wrecking_ball();
        let ball_team = add_hero_to_team(&initialize_team(), &ball);
        let mut fits = get_hero_fits(&ball_team, &all);
        fits.sort_by(|a, b| b.fit.score.cmp(&a.fit.score));
        assert_eq!(fits[0].hero.id, "tracer");
        assert_eq!(fits[1].hero.id, "bastion");
        assert!(fits[0].fit.score > fits[1].fit.score);
    }

    #[test]
    fn test_serialize_reasons_as_text() {
        let ball = fixtures::wrecking_ball();
        let tracer = fixtures::tracer();
        let team = add_hero_to_team(&initialize_team(), &ball);
        let fits = get_hero_fits(&team, [&tracer]);
        let json = serde_json::to_value(&fits).unwrap();
        assert_eq!(json[0]["hero"], "tracer");
        assert_eq!(json[0]["score"], 75);
        assert_eq!(json[0]["reasons"][0], "Matches tempo");
    }
}
