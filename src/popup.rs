//! The scripted subscribe-popup composition: a 360-frame, 60 fps timeline in
//! which a profile card pops in, a cursor sweeps across the card clicking the
//! thumb-up, subscribe and bell controls, and each click lands with a bounce
//! and an audio cue.

use popup_data::{
    AudioCueSpec, ChannelSpec, EasingSpec, OverlaySpec, SourceSpec, SwitchSpec, TimelineSpec,
    ValueMap,
};

pub const FPS: f64 = 60.0;
pub const DURATION_FRAMES: i64 = 360;
pub const WIDTH: u32 = 1920;
pub const HEIGHT: u32 = 1080;

/// Frame at which the cursor clicks the thumb-up icon.
pub const THUMB_UP_CLICK: i64 = 140;
/// Frame at which the cursor clicks the subscribe button.
pub const SUBSCRIBE_CLICK: i64 = 210;
/// Frame at which the cursor clicks the notification bell.
pub const BELL_CLICK: i64 = 280;

/// Shared pop-in spring for every element appearing on the card.
fn appear_spring() -> SourceSpec {
    SourceSpec::Spring {
        from: 0.0,
        to: 1.0,
        damping: 10.5,
        stiffness: 160.0,
        mass: 0.6,
    }
}

fn sweep_easing() -> EasingSpec {
    EasingSpec::Bezier {
        x1: 0.37,
        y1: 0.37,
        x2: 0.21,
        y2: 0.97,
    }
}

/// Squash bounce stamped at both click moments that have a scale reaction.
fn bounce_source() -> SourceSpec {
    SourceSpec::Periodic {
        events: vec![THUMB_UP_CLICK, SUBSCRIBE_CLICK],
        sub_offsets: vec![0, 10, 20, 30],
        pattern: vec![1.0, 0.8, 1.0, 1.0],
        easing: EasingSpec::Linear,
    }
}

fn bounce_overlay(start: i64, end: i64) -> OverlaySpec {
    OverlaySpec {
        start,
        end,
        source: bounce_source(),
        map: None,
    }
}

fn spring_channel(name: &str, trigger: i64) -> ChannelSpec {
    ChannelSpec {
        name: name.to_string(),
        trigger,
        source: appear_spring(),
        map: None,
        overlay: None,
    }
}

fn curve_channel(name: &str, inputs: Vec<f64>, outputs: Vec<f64>) -> ChannelSpec {
    ChannelSpec {
        name: name.to_string(),
        trigger: 0,
        source: SourceSpec::Curve {
            inputs,
            outputs,
            easing: sweep_easing(),
            extrapolate_left: Default::default(),
            extrapolate_right: Default::default(),
        },
        map: None,
        overlay: None,
    }
}

/// Full configuration of the subscribe-popup video.
pub fn subscribe_popup_spec() -> TimelineSpec {
    let mut channels = vec![
        // Pop-in scales, staggered down the card.
        spring_channel("box_scale", 0),
        spring_channel("profile_picture_scale", 20),
        spring_channel("bell_scale", 40),
        spring_channel("thumb_down_scale", 60),
        // Subscribe button and thumb-up also squash when clicked.
        ChannelSpec {
            overlay: Some(bounce_overlay(SUBSCRIBE_CLICK, SUBSCRIBE_CLICK + 20)),
            ..spring_channel("subscribe_scale", 30)
        },
        ChannelSpec {
            overlay: Some(bounce_overlay(THUMB_UP_CLICK, THUMB_UP_CLICK + 20)),
            ..spring_channel("thumb_up_scale", 50)
        },
        // Rotations ride the same springs, remapped to degrees.
        ChannelSpec {
            map: Some(ValueMap {
                scale: 30.0,
                offset: -30.0,
            }),
            ..spring_channel("thumb_up_rotation", 50)
        },
        ChannelSpec {
            map: Some(ValueMap {
                scale: -30.0,
                offset: 30.0,
            }),
            ..spring_channel("thumb_down_rotation", 60)
        },
        // The bell settles like the thumbs but shakes after its click.
        ChannelSpec {
            map: Some(ValueMap {
                scale: -30.0,
                offset: 30.0,
            }),
            overlay: Some(OverlaySpec {
                start: BELL_CLICK,
                end: BELL_CLICK + 30,
                source: SourceSpec::Periodic {
                    events: vec![BELL_CLICK],
                    sub_offsets: vec![0, 5, 10, 15, 20, 25, 30],
                    pattern: vec![1.0, 0.0, 2.0, 1.0, 0.0, 2.0, 1.0],
                    easing: EasingSpec::Linear,
                },
                map: Some(ValueMap {
                    scale: 30.0,
                    offset: -30.0,
                }),
            }),
            ..spring_channel("bell_rotation", 40)
        },
        // Like/dislike ratio bar, in percent of its container.
        curve_channel("ratio_bar_width", vec![60.0, 120.0], vec![0.0, 100.0]),
        curve_channel(
            "ratio_bar_fill_width",
            vec![140.0, 200.0],
            vec![0.0, 100.0],
        ),
        // Cursor sweep across the card, in percent of the viewport.
        curve_channel(
            "cursor_bottom",
            vec![100.0, 130.0, 320.0, 350.0],
            vec![-15.0, 35.0, 35.0, 10.0],
        ),
        curve_channel(
            "cursor_left",
            vec![100.0, 130.0, 150.0, 200.0, 220.0, 270.0, 320.0, 350.0],
            vec![40.0, 34.0, 34.0, 60.0, 60.0, 75.0, 75.0, 85.0],
        ),
    ];

    // Cursor click pulse at every click moment, shrunk to cursor size.
    channels.push(ChannelSpec {
        name: "cursor_scale".into(),
        trigger: 0,
        source: SourceSpec::Periodic {
            events: vec![THUMB_UP_CLICK - 10, SUBSCRIBE_CLICK - 10, BELL_CLICK - 10],
            sub_offsets: vec![0, 10, 20, 30],
            pattern: vec![1.0, 0.8, 1.2, 1.0],
            easing: sweep_easing(),
        },
        map: Some(ValueMap {
            scale: 1.0,
            offset: -0.3,
        }),
        overlay: None,
    });

    TimelineSpec {
        fps: FPS,
        duration_frames: DURATION_FRAMES,
        width: WIDTH,
        height: HEIGHT,
        channels,
        switches: vec![
            SwitchSpec {
                name: "thumb_up".into(),
                threshold: THUMB_UP_CLICK,
            },
            SwitchSpec {
                name: "subscribed".into(),
                threshold: SUBSCRIBE_CLICK,
            },
            SwitchSpec {
                name: "notifications".into(),
                threshold: BELL_CLICK,
            },
        ],
        cues: vec![
            AudioCueSpec {
                source: "click".into(),
                start_frame: THUMB_UP_CLICK - 10,
                duration_frames: 20,
                trim_start: 60,
                trim_end: 80,
            },
            AudioCueSpec {
                source: "click".into(),
                start_frame: SUBSCRIBE_CLICK - 10,
                duration_frames: 20,
                trim_start: 60,
                trim_end: 80,
            },
            AudioCueSpec {
                source: "bell".into(),
                start_frame: BELL_CLICK - 10,
                duration_frames: 40,
                trim_start: 10,
                trim_end: 50,
            },
        ],
    }
}
