use crate::types::{EventKind, GameEvent, GameStatSummary, ZoneId};

/// `made / attempted * 100`, 0 when nothing was attempted
#[inline]
pub fn percentage(made: f64, attempted: f64) -> f64 {
    if attempted > 0.0 {
        made / attempted * 100.0
    } else {
        0.0
    }
}

/// Effective field-goal percentage: threes weigh 1.5 makes
#[inline]
pub fn effective_fg_pct(fgm: f64, threes_made: f64, fga: f64) -> f64 {
    percentage(fgm + 0.5 * threes_made, fga)
}

/// Reduce game events to a stat summary in a single pass
///
/// Unknown event kinds are ignored. Accepts anything yielding event
/// references, so filtered views can be passed without cloning.
pub fn aggregate_game_events<'a, I>(events: I) -> GameStatSummary
where
    I: IntoIterator<Item = &'a GameEvent>,
{
    let mut summary = GameStatSummary::default();

    for event in events {
        match event.kind {
            EventKind::Assist => summary.assists += 1,
            EventKind::Rebound => summary.rebounds += 1,
            EventKind::Steal => summary.steals += 1,
            EventKind::Shot => record_shot(&mut summary, event),
            EventKind::Freethrow => {
                summary.ft_att += 1;
                if event.made {
                    summary.ft_makes += 1;
                    summary.total_points += 1;
                }
            }
            EventKind::Other => {}
        }
    }

    summary.fg_pct = percentage(summary.fgm as f64, summary.fga as f64);
    summary.efg_pct = effective_fg_pct(
        summary.fgm as f64,
        summary.threes_made as f64,
        summary.fga as f64,
    );
    summary.three_pct = percentage(summary.threes_made as f64, summary.threes_att as f64);
    summary.ft_pct = percentage(summary.ft_makes as f64, summary.ft_att as f64);

    summary
}

fn record_shot(summary: &mut GameStatSummary, event: &GameEvent) {
    let made = event.made;

    summary.fga += 1;
    if made {
        summary.fgm += 1;
        summary.total_points += if event.is_three { 3 } else { 2 };
    }

    if event.is_three {
        summary.threes_att += 1;
        if made {
            summary.threes_made += 1;
        }
    }

    let zone = event.zone();
    *summary.zone_fga.entry(ZoneId::from(zone)).or_insert(0) += 1;
    if made {
        *summary.zone_fgm.entry(ZoneId::from(zone)).or_insert(0) += 1;
    }

    if event.is_off_dribble() {
        summary.off_dribble_att += 1;
        if made {
            summary.off_dribble_makes += 1;
        }
    }

    if event.pressured {
        summary.pressured_att += 1;
        if made {
            summary.pressured_makes += 1;
        }
    }
}
