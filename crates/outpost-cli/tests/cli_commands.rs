//! CLI integration tests for the outpost binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn outpost() -> Command {
    let mut cmd = Command::cargo_bin("outpost").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn play(script: &str) -> assert_cmd::assert::Assert {
    outpost()
        .args(["play", "--seed", "42"])
        .write_stdin(script)
        .assert()
}

// ---------------------------------------------------------------------------
// catalogs
// ---------------------------------------------------------------------------

#[test]
fn actions_lists_catalog() {
    outpost()
        .arg("actions")
        .assert()
        .success()
        .stdout(predicate::str::contains("scavenge"))
        .stdout(predicate::str::contains("sneak_scout"))
        .stdout(predicate::str::contains("11 actions"));
}

#[test]
fn backgrounds_lists_all() {
    outpost()
        .arg("backgrounds")
        .assert()
        .success()
        .stdout(predicate::str::contains("Medic"))
        .stdout(predicate::str::contains("Painkillers"))
        .stdout(predicate::str::contains("Soldier"));
}

#[test]
fn unknown_subcommand_fails() {
    outpost().arg("dance").assert().failure();
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_quits_cleanly() {
    play("help\nquit\n")
        .success()
        .stdout(predicate::str::contains("survivor <actor> <name> <background>"))
        .stdout(predicate::str::contains("Camp closed."));
}

#[test]
fn play_ends_on_eof() {
    play("actions\n").success().stdout(predicate::str::contains("heal"));
}

#[test]
fn solo_roll_resolves() {
    play("survivor 1 Mara Medic\ndo 1 heal\nreroll 1 1\nsubmit 1 1\nsheet 1\n")
        .success()
        .stdout(predicate::str::contains("Roll #1 open"))
        .stdout(predicate::str::contains("Heal complete"))
        .stdout(predicate::str::contains("Daily action: done"));
}

#[test]
fn daily_action_is_spent_once() {
    play("survivor 1 Mara Medic\ndo 1 heal\nsubmit 1 1\ndo 1 heal\n")
        .success()
        .stdout(predicate::str::contains("@1 already did an action today"));
}

#[test]
fn start_requires_survivor() {
    play("do 5 scavenge\n")
        .success()
        .stdout(predicate::str::contains("@5 needs to create a survivor first"));
}

#[test]
fn group_roll_resolves_after_everyone_submits() {
    play(
        "survivor 1 Rook Scavenger\n\
         survivor 2 Tess Mechanic\n\
         group 1 scavenge\n\
         join 1 2\n\
         launch 1 2\n\
         launch 1 1\n\
         submit 2 1\n\
         submit 2 3\n\
         submit 2 2\n\
         submit 2 2\n\
         stash\n",
    )
    .success()
    .stdout(predicate::str::contains("Lobby #1 open"))
    .stdout(predicate::str::contains("Group roll #2 started."))
    .stdout(predicate::str::contains("@3 cannot act on #2."))
    .stdout(predicate::str::contains("No live session #2."));
}

#[test]
fn unknown_session_is_reported() {
    play("add 99 1\n")
        .success()
        .stdout(predicate::str::contains("No live session #99."));
}

#[test]
fn json_report() {
    outpost()
        .args(["play", "--seed", "1", "--json"])
        .write_stdin("survivor 1 Ash Soldier\ndo 1 guard\nsubmit 1 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"effect\": \"Guard complete\""))
        .stdout(predicate::str::contains("\"resolved_at\""));
}

#[test]
fn strict_acks_flag_is_accepted() {
    outpost()
        .args(["play", "--strict-acks", "--base-dice", "2"])
        .write_stdin("survivor 1 Ash Soldier\ndo 1 cook\nadd 1 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing changed."));
}

#[test]
fn debug_logging_goes_to_stderr() {
    outpost()
        .args(["--log-level", "debug", "play", "--seed", "3"])
        .write_stdin("survivor 1 Ash Soldier\ndo 1 guard\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("solo roll opened"));
}

#[test]
fn quit_with_arguments_stops_the_console() {
    play("quit now\nactions\n")
        .success()
        .stdout(predicate::str::contains("Camp closed."))
        .stdout(predicate::str::contains("sneak_scout").not());
}

#[test]
fn quit_reports_inputs_handled() {
    outpost()
        .args(["--log-level", "info", "play", "--seed", "3"])
        .write_stdin("survivor 1 Ash Soldier\ndo 1 guard\nsubmit 1 1\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("camp closed"))
        .stderr(predicate::str::contains("inputs"));
}

// ---------------------------------------------------------------------------
// survivors and gear
// ---------------------------------------------------------------------------

#[test]
fn allocate_spends_points_once() {
    play("survivor 1 Mara Medic\nallocate 1 farming=3 stealth=2\nallocate 1 melee=1\nsheet 1\n")
        .success()
        .stdout(predicate::str::contains("Skills allocated for @1. 0 points left unspent."))
        .stdout(predicate::str::contains("skill points already allocated"))
        .stdout(predicate::str::contains("Unspent points: 0"));
}

#[test]
fn allocate_rejects_more_than_the_cap() {
    play("survivor 1 Mara Medic\nallocate 1 farming=4\nallocate 1 farming=6\n")
        .success()
        .stdout(predicate::str::contains(
            "cannot assign more than 3 points to Farming at creation",
        ))
        .stdout(predicate::str::contains("only 5 points to spend, tried to spend 6"));
}

#[test]
fn unequip_then_equip() {
    play("survivor 1 Mara Medic\nunequip 1 Medical Kit\nunequip 1 Medical Kit\nequip 1 Medical Kit\n")
        .success()
        .stdout(predicate::str::contains("Mara puts away Medical Kit."))
        .stdout(predicate::str::contains("item not equipped: \"Medical Kit\""))
        .stdout(predicate::str::contains("Mara equips Medical Kit."));
}

#[test]
fn items_move_between_survivors_and_stash() {
    play(
        "survivor 1 Mara Medic\n\
         survivor 2 Rook Scavenger\n\
         give 1 2 Bandage 2\n\
         give 1 2 Bandage\n\
         store 2 bandage 2\n\
         take 1 Bandage\n\
         stash\n",
    )
    .success()
    .stdout(predicate::str::contains("@1 gave @2 2x Bandage."))
    .stdout(predicate::str::contains("not enough \"Bandage\": have 0, wanted 1"))
    .stdout(predicate::str::contains("Stored 2x Bandage. The stash holds 2."))
    .stdout(predicate::str::contains("@1 took 1x Bandage. 1 left in the stash."));
}
