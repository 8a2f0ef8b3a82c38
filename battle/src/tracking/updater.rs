//! Applies parsed log lines to the battle state

use pivot_protocol::{HpStatus, LogEvent, ParsedLine, PokemonRef, SideId, Slot};

use crate::tracking::battle::BattleTracker;
use crate::tracking::turns::{ActionKind, TurnAction};
use crate::types::{ActiveState, PlayerMeta, PreviewPokemon, Status, Weather};

impl BattleTracker {
    /// Apply one parsed line to the battle state.
    ///
    /// Unknown events and references to slots that were never filled are
    /// ignored; replay logs routinely mention things this layer does not
    /// model.
    pub fn apply(&mut self, line: &ParsedLine) {
        match &line.event {
            LogEvent::Player { side, name, rating } => {
                *self.players.get_mut(*side) = Some(PlayerMeta::new(name, *rating));
            }
            LogEvent::Poke { side, details } => {
                self.preview.get_mut(*side).push(PreviewPokemon::from(details));
            }
            LogEvent::Turn(turn) => {
                self.recorder.boundary(*turn, &self.active, &self.field);
            }
            LogEvent::Win { name } => {
                self.winner = self.side_of_player(name);
            }
            LogEvent::RatingUpdate {
                name,
                before,
                after,
            } => {
                if let Some(side) = self.side_of_player(name) {
                    if let Some(meta) = self.players.get_mut(side) {
                        meta.rating_before = Some(*before);
                        meta.rating_after = Some(*after);
                    }
                }
            }

            LogEvent::Switch {
                pokemon,
                details,
                hp,
            } => {
                self.enter(pokemon, &details.species, hp.as_ref());
                // Lead switch-ins before turn 1 are forced, not chosen
                if self.recorder.in_turn() {
                    self.recorder.push_action(TurnAction {
                        slot: pokemon.slot,
                        kind: ActionKind::Switch,
                        detail: details.species.clone(),
                        target: None,
                        tera: None,
                    });
                }
            }
            LogEvent::Drag {
                pokemon,
                details,
                hp,
            } => {
                // Forced by a move, so no action is recorded
                self.enter(pokemon, &details.species, hp.as_ref());
            }
            LogEvent::Move {
                pokemon,
                move_name,
                target,
            } => {
                let species = self.resolve_species(pokemon.slot, &pokemon.nickname);
                self.reveal
                    .entry(pokemon.slot.side, &species)
                    .add_move(move_name);
                if self.recorder.in_turn() {
                    let tera = self.recorder.take_tera(pokemon.slot);
                    self.recorder.push_action(TurnAction {
                        slot: pokemon.slot,
                        kind: ActionKind::Move,
                        detail: move_name.clone(),
                        target: *target,
                        tera,
                    });
                }
            }
            LogEvent::Cant { pokemon, reason } => {
                if self.recorder.in_turn() {
                    self.recorder.push_action(TurnAction {
                        slot: pokemon.slot,
                        kind: ActionKind::Cant,
                        detail: reason.clone(),
                        target: None,
                        tera: None,
                    });
                }
            }
            LogEvent::Faint(pokemon) => {
                if let Some(state) = self.active.get_mut(&pokemon.slot) {
                    state.faint();
                }
                self.recorder.push_faint(pokemon.slot);
            }
            LogEvent::Swap(pokemon) => {
                self.swap_positions(pokemon.slot);
            }
            LogEvent::DetailsChange { pokemon, details } => {
                // Forme change, not a new pokemon entering
                self.slot_species
                    .insert(pokemon.slot, details.species.clone());
                self.nickname_species.insert(
                    (pokemon.slot, pokemon.nickname.clone()),
                    details.species.clone(),
                );
                if let Some(state) = self.active.get_mut(&pokemon.slot) {
                    state.species = details.species.clone();
                }
            }

            LogEvent::Damage { pokemon, hp } => {
                if let Some(state) = self.active.get_mut(&pokemon.slot) {
                    state.apply_hp_status(hp);
                    if hp.current == 0 {
                        state.fainted = true;
                    }
                }
            }
            LogEvent::Heal { pokemon, hp } => {
                if let Some(state) = self.active.get_mut(&pokemon.slot) {
                    state.apply_hp_status(hp);
                }
            }
            LogEvent::Boost {
                pokemon,
                stat,
                amount,
            } => {
                if let Some(state) = self.active.get_mut(&pokemon.slot) {
                    state.boosts.apply(*stat, *amount);
                }
            }
            LogEvent::Unboost {
                pokemon,
                stat,
                amount,
            } => {
                if let Some(state) = self.active.get_mut(&pokemon.slot) {
                    state.boosts.apply(*stat, -*amount);
                }
            }
            LogEvent::Status { pokemon, status } => {
                if let Some(parsed) = Status::from_protocol(status) {
                    if let Some(state) = self.active.get_mut(&pokemon.slot) {
                        state.status = Some(parsed);
                    }
                }
            }
            LogEvent::CureStatus(pokemon) => {
                if let Some(state) = self.active.get_mut(&pokemon.slot) {
                    state.status = None;
                }
            }
            LogEvent::Terastallize { pokemon, tera_type } => {
                let species = self.resolve_species(pokemon.slot, &pokemon.nickname);
                self.reveal.entry(pokemon.slot.side, &species).tera_type =
                    Some(tera_type.clone());
                if let Some(state) = self.active.get_mut(&pokemon.slot) {
                    state.tera_type = Some(tera_type.clone());
                }
                self.recorder.record_tera(pokemon.slot, tera_type);
            }

            LogEvent::Weather { weather } => {
                // Upkeep lines repeat the standing weather every turn
                if !line.tags.upkeep {
                    let name = weather.trim();
                    if name.is_empty() || name.eq_ignore_ascii_case("none") {
                        self.field.weather = None;
                    } else if let Some(parsed) = Weather::from_protocol(name) {
                        self.field.weather = Some(parsed);
                    }
                    // A name outside the vocabulary leaves the tracked
                    // weather alone rather than clearing it
                }
            }
            LogEvent::FieldStart { effect } => self.field.apply_field_start(effect),
            LogEvent::FieldEnd { effect } => self.field.apply_field_end(effect),
            LogEvent::SideStart { side, effect } => {
                self.field.apply_side_start(*side, effect);
            }
            LogEvent::SideEnd { side, effect } => {
                self.field.apply_side_end(*side, effect);
            }

            LogEvent::ItemReveal { pokemon, item } => {
                let species = self.resolve_species(pokemon.slot, &pokemon.nickname);
                self.reveal.entry(pokemon.slot.side, &species).item = Some(item.clone());
            }
            LogEvent::AbilityReveal { pokemon, ability } => {
                let species = self.resolve_species(pokemon.slot, &pokemon.nickname);
                self.reveal.entry(pokemon.slot.side, &species).ability = Some(ability.clone());
            }

            LogEvent::Other(_) => {}
        }

        self.apply_tag_reveals(line);
    }

    /// A pokemon entering an active slot, by switch or by drag
    fn enter(&mut self, pokemon: &PokemonRef, species: &str, hp: Option<&HpStatus>) {
        self.bind_slot(pokemon.slot, &pokemon.nickname, species);
        self.active.insert(
            pokemon.slot,
            ActiveState::switched_in(species, &pokemon.nickname, hp),
        );
    }

    /// Exchange a slot's state with its partner position (doubles)
    fn swap_positions(&mut self, slot: Slot) {
        let other = Slot::new(slot.side, if slot.pos == 'a' { 'b' } else { 'a' });

        let a = self.active.remove(&slot);
        let b = self.active.remove(&other);
        if let Some(state) = a {
            self.active.insert(other, state);
        }
        if let Some(state) = b {
            self.active.insert(slot, state);
        }

        let a = self.slot_species.remove(&slot);
        let b = self.slot_species.remove(&other);
        if let Some(species) = a {
            self.slot_species.insert(other, species);
        }
        if let Some(species) = b {
            self.slot_species.insert(slot, species);
        }
    }

    /// Reveals carried by bracketed qualifiers rather than the keyword
    /// itself. An "[of]" pokemon owning a "[from] ability:" had that
    /// ability; a line subject affected "[from] item:" had that item.
    fn apply_tag_reveals(&mut self, line: &ParsedLine) {
        if let (Some(ability), Some(of)) = (&line.tags.from_ability, &line.tags.of) {
            let species = self.resolve_species(of.slot, &of.nickname);
            self.reveal.entry(of.slot.side, &species).ability = Some(ability.clone());
        }
        if let (Some(item), Some(subject)) = (&line.tags.from_item, &line.subject) {
            let species = self.resolve_species(subject.slot, &subject.nickname);
            self.reveal.entry(subject.slot.side, &species).item = Some(item.clone());
        }
    }

    fn side_of_player(&self, name: &str) -> Option<SideId> {
        for side in [SideId::P1, SideId::P2] {
            if let Some(meta) = self.players.get(side) {
                if meta.name == name {
                    return Some(side);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use pivot_protocol::{SideId, Stat, parse_log_line};

    use super::*;

    fn feed(tracker: &mut BattleTracker, lines: &[&str]) {
        for line in lines {
            let parsed = parse_log_line(line).unwrap();
            tracker.apply(&parsed);
        }
    }

    fn slot(s: &str) -> Slot {
        Slot::parse(s).unwrap()
    }

    #[test]
    fn test_players_and_preview() {
        let mut tracker = BattleTracker::new();
        feed(
            &mut tracker,
            &[
                "|player|p1|Alice||1500",
                "|player|p2|Bob||1480",
                "|poke|p1|Incineroar, L50, M|",
                "|poke|p1|Rillaboom, L50, F|",
            ],
        );

        let p1 = tracker.players.p1.as_ref().unwrap();
        assert_eq!(p1.name, "Alice");
        assert_eq!(p1.rating_before, Some(1500));
        assert_eq!(tracker.preview.p1.len(), 2);
        assert_eq!(tracker.preview.p1[0].species, "Incineroar");
        assert!(tracker.has_players());
    }

    #[test]
    fn test_switch_binds_slot_and_tracks_hp() {
        let mut tracker = BattleTracker::new();
        feed(&mut tracker, &["|switch|p1a: Cat|Incineroar, L50, M|100/100"]);

        let state = tracker.active.get(&slot("p1a")).unwrap();
        assert_eq!(state.species, "Incineroar");
        assert_eq!(state.hp, 100);
        assert_eq!(tracker.resolve_species(slot("p1a"), "Cat"), "Incineroar");
        assert_eq!(tracker.brought.p1, vec!["Incineroar"]);
    }

    #[test]
    fn test_lead_switch_is_not_an_action() {
        let mut tracker = BattleTracker::new();
        feed(
            &mut tracker,
            &[
                "|switch|p1a: Cat|Incineroar, L50, M|100/100",
                "|turn|1",
                "|switch|p1a: Bird|Talonflame, L50|100/100",
                "|turn|2",
            ],
        );

        let records = tracker.recorder.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].actions.len(), 1);
        assert_eq!(records[0].actions[0].kind, ActionKind::Switch);
        assert_eq!(records[0].actions[0].detail, "Talonflame");
    }

    #[test]
    fn test_drag_changes_state_without_action() {
        let mut tracker = BattleTracker::new();
        feed(
            &mut tracker,
            &[
                "|switch|p1a: Cat|Incineroar, L50, M|100/100",
                "|turn|1",
                "|drag|p1a: Dozer|Hippowdon, L50|100/100",
                "|turn|2",
            ],
        );

        let records = tracker.recorder.records();
        assert!(records[0].actions.is_empty());
        assert_eq!(
            tracker.active.get(&slot("p1a")).unwrap().species,
            "Hippowdon"
        );
    }

    #[test]
    fn test_move_reveals_and_records_action() {
        let mut tracker = BattleTracker::new();
        feed(
            &mut tracker,
            &[
                "|switch|p1a: Cat|Incineroar, L50, M|100/100",
                "|switch|p2a: Lunala|Lunala, L50|100/100",
                "|turn|1",
                "|move|p1a: Cat|Fake Out|p2a: Lunala",
                "|turn|2",
            ],
        );

        let info = tracker.reveal.get(SideId::P1, "Incineroar").unwrap();
        assert_eq!(info.moves, vec!["Fake Out"]);

        let action = &tracker.recorder.records()[0].actions[0];
        assert_eq!(action.kind, ActionKind::Move);
        assert_eq!(action.detail, "Fake Out");
        assert_eq!(action.target, Some(slot("p2a")));
    }

    #[test]
    fn test_damage_heal_and_faint() {
        let mut tracker = BattleTracker::new();
        feed(
            &mut tracker,
            &[
                "|switch|p1a: Cat|Incineroar, L50, M|100/100",
                "|turn|1",
                "|-damage|p1a: Cat|38/100",
                "|-heal|p1a: Cat|55/100",
                "|-damage|p1a: Cat|0 fnt",
                "|faint|p1a: Cat",
                "|turn|2",
            ],
        );

        let state = tracker.active.get(&slot("p1a")).unwrap();
        assert_eq!(state.hp, 0);
        assert!(state.fainted);
        assert_eq!(tracker.recorder.records()[0].faints, vec![slot("p1a")]);
    }

    #[test]
    fn test_boost_status_cure() {
        let mut tracker = BattleTracker::new();
        feed(
            &mut tracker,
            &[
                "|switch|p1a: Cat|Incineroar, L50, M|100/100",
                "|-boost|p1a: Cat|atk|2",
                "|-unboost|p1a: Cat|spe|1",
                "|-status|p1a: Cat|brn",
            ],
        );

        let state = tracker.active.get(&slot("p1a")).unwrap();
        assert_eq!(state.boosts.get(Stat::Atk), 2);
        assert_eq!(state.boosts.get(Stat::Spe), -1);
        assert_eq!(state.status, Some(Status::Burn));

        feed(&mut tracker, &["|-curestatus|p1a: Cat|brn"]);
        assert_eq!(tracker.active.get(&slot("p1a")).unwrap().status, None);
    }

    #[test]
    fn test_weather_upkeep_does_not_reset() {
        let mut tracker = BattleTracker::new();
        feed(&mut tracker, &["|-weather|SunnyDay"]);
        assert_eq!(tracker.field.weather, Some(Weather::Sun));

        feed(&mut tracker, &["|-weather|SunnyDay|[upkeep]"]);
        assert_eq!(tracker.field.weather, Some(Weather::Sun));

        feed(&mut tracker, &["|-weather|none"]);
        assert_eq!(tracker.field.weather, None);
    }

    #[test]
    fn test_unknown_weather_name_leaves_weather_standing() {
        let mut tracker = BattleTracker::new();
        feed(&mut tracker, &["|-weather|SunnyDay"]);
        feed(&mut tracker, &["|-weather|Fog"]);

        assert_eq!(tracker.field.weather, Some(Weather::Sun));
    }

    #[test]
    fn test_tera_marks_state_and_next_move() {
        let mut tracker = BattleTracker::new();
        feed(
            &mut tracker,
            &[
                "|switch|p1a: Cat|Incineroar, L50, M|100/100",
                "|turn|1",
                "|-terastallize|p1a: Cat|Grass",
                "|move|p1a: Cat|Grassy Glide|p2a: Lunala",
                "|move|p1a: Cat|Grassy Glide|p2a: Lunala",
                "|turn|2",
            ],
        );

        let state = tracker.active.get(&slot("p1a")).unwrap();
        assert_eq!(state.tera_type.as_deref(), Some("Grass"));
        assert_eq!(
            tracker
                .reveal
                .get(SideId::P1, "Incineroar")
                .unwrap()
                .tera_type
                .as_deref(),
            Some("Grass")
        );

        let actions = &tracker.recorder.records()[0].actions;
        assert_eq!(actions[0].tera.as_deref(), Some("Grass"));
        assert_eq!(actions[1].tera, None);
    }

    #[test]
    fn test_swap_exchanges_positions() {
        let mut tracker = BattleTracker::new();
        feed(
            &mut tracker,
            &[
                "|switch|p1a: Cat|Incineroar, L50, M|100/100",
                "|switch|p1b: Dozer|Hippowdon, L50|100/100",
                "|swap|p1a: Cat|1",
            ],
        );

        assert_eq!(
            tracker.active.get(&slot("p1a")).unwrap().species,
            "Hippowdon"
        );
        assert_eq!(
            tracker.active.get(&slot("p1b")).unwrap().species,
            "Incineroar"
        );
        assert_eq!(tracker.resolve_species(slot("p1a"), "Dozer"), "Hippowdon");
    }

    #[test]
    fn test_detailschange_keeps_slot_occupied() {
        let mut tracker = BattleTracker::new();
        feed(
            &mut tracker,
            &[
                "|switch|p1a: Terapagos|Terapagos, L50|100/100",
                "|detailschange|p1a: Terapagos|Terapagos-Terastal, L50",
            ],
        );

        let state = tracker.active.get(&slot("p1a")).unwrap();
        assert_eq!(state.species, "Terapagos-Terastal");
        assert_eq!(state.hp, 100);
        // Still counts as one pokemon brought
        assert_eq!(tracker.brought.p1, vec!["Terapagos"]);
    }

    #[test]
    fn test_tag_reveals() {
        let mut tracker = BattleTracker::new();
        feed(
            &mut tracker,
            &[
                "|switch|p1a: Cat|Incineroar, L50, M|100/100",
                "|switch|p2a: Lunala|Lunala, L50|100/100",
                "|-activate|p1a: Cat|ability: Intimidate",
                "|-weather|SunnyDay|[from] ability: Drought|[of] p2a: Lunala",
                "|-heal|p1a: Cat|100/100|[from] item: Leftovers",
            ],
        );

        assert_eq!(
            tracker
                .reveal
                .get(SideId::P2, "Lunala")
                .unwrap()
                .ability
                .as_deref(),
            Some("Drought")
        );
        assert_eq!(
            tracker
                .reveal
                .get(SideId::P1, "Incineroar")
                .unwrap()
                .item
                .as_deref(),
            Some("Leftovers")
        );
    }

    #[test]
    fn test_win_and_rating_update() {
        let mut tracker = BattleTracker::new();
        feed(
            &mut tracker,
            &[
                "|player|p1|Alice||1500",
                "|player|p2|Bob||1480",
                "|win|Bob",
                "|raw|Bob's rating: 1480 &rarr; <strong>1495</strong><br />",
            ],
        );

        assert_eq!(tracker.winner, Some(SideId::P2));
        let p2 = tracker.players.p2.as_ref().unwrap();
        assert_eq!(p2.rating_before, Some(1480));
        assert_eq!(p2.rating_after, Some(1495));
    }
}
