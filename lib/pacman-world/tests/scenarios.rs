/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

use pacman_world::{Agent, Facing, PacmanError, Transcript};

const NOT_PLACED: &str = "Can't do that. You have't placed the Pacman yet :/";

fn agent() -> Agent<Transcript> {
    Agent::with_console(Transcript::new())
}

#[test]
fn test_move_north_from_origin() {
    let mut agent = agent();
    agent.place(0, 0, Facing::North).move_forward().report();
    assert_eq!(agent.into_console().lines(), ["0,1,NORTH"]);
}

#[test]
fn test_turn_left_from_north_faces_west() {
    let mut agent = agent();
    agent.place(0, 0, Facing::North).turn_left().report();
    assert_eq!(agent.into_console().lines(), ["0,0,WEST"]);
}

#[test]
fn test_walk_east_then_north() {
    // (1,2) -> (2,2) -> (3,2), turn to NORTH, -> (3,3)
    let mut agent = agent();
    agent.place(1, 2, Facing::East);
    assert_eq!(agent.try_move_forward().map(|c| (c.x(), c.y())), Ok((2, 2)));
    assert_eq!(agent.try_move_forward().map(|c| (c.x(), c.y())), Ok((3, 2)));
    assert_eq!(agent.try_turn_left(), Ok(Facing::North));
    assert_eq!(agent.try_move_forward().map(|c| (c.x(), c.y())), Ok((3, 3)));
    agent.report();
    assert_eq!(agent.into_console().lines(), ["3,3,NORTH"]);
}

#[test]
fn test_turn_before_place() {
    let mut agent = agent();
    agent.turn_left();
    assert!(!agent.is_placed());
    assert_eq!(agent.try_report(), Err(PacmanError::NotPlaced));
    assert_eq!(agent.into_console().lines(), [NOT_PLACED]);
}

#[test]
fn test_walk_the_perimeter() {
    let mut agent = agent();
    agent.place(0, 0, Facing::North);
    for _ in 0..4 {
        for _ in 0..4 {
            agent.move_forward();
        }
        agent.report().turn_right();
    }
    agent.move_forward().move_forward().report();
    assert_eq!(
        agent.into_console().lines(),
        ["0,4,NORTH", "4,4,EAST", "4,0,SOUTH", "0,0,WEST", "0,2,NORTH"]
    );
}

#[test]
fn test_pose_snapshot_serializes() {
    let mut agent = agent();
    assert_eq!(
        serde_json::to_string(&agent.pose()).expect("serialize failed"),
        "null"
    );
    agent.place(4, 1, Facing::West);
    assert_eq!(
        serde_json::to_string(&agent.pose()).expect("serialize failed"),
        r#"{"coordinate":{"x":4,"y":1},"facing":"WEST"}"#
    );
}
