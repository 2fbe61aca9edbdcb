use lumen::{
    batch::{batch_deferred, batch_depth, batch_forward, batch_shadows, batch_translucent},
    types::{Camera, InstanceId, InstanceOpaque, LightId},
    util::typedefs::FastHashSet,
    Capabilities, Scene, SceneBuilder,
};

use crate::common::{init_logging, opaque, shiny_surface, spot, sun, textured_surface, translucent};

/// A scene exercising every entry point.
fn busy_scene() -> Scene {
    let mut builder = SceneBuilder::new(Camera::default());
    let (key, fill, lamp) = (spot(1), sun(2), spot(3));

    for id in 1..=4 {
        builder.add_opaque_lit_visible_with_shadow(key, opaque(id, shiny_surface()));
    }
    for id in 3..=6 {
        builder.add_opaque_lit_visible_without_shadow(fill, opaque(id, textured_surface(20)));
    }
    for id in 7..=9 {
        builder.add_opaque_unlit(opaque(id, textured_surface(21)));
    }
    builder.add_invisible_with_shadow(key, opaque(10, shiny_surface()));
    builder.add_invisible_with_shadow(lamp, opaque(7, shiny_surface()));
    builder.add_light_group_light("cellar", lamp);
    builder.add_light_group_instance("cellar", opaque(11, shiny_surface()));
    builder.add_translucent_lit(translucent(12).into(), &[key, fill]);
    builder.add_translucent_unlit(translucent(13).into());
    builder.create()
}

#[test]
fn forward_batches_cover_the_visible_set() {
    init_logging();
    let scene = busy_scene();
    let forward = batch_forward(&scene, &Capabilities::default());

    let mut seen = FastHashSet::default();
    let mut draws = 0;
    for instance in forward
        .unlit
        .values()
        .chain(forward.lit.values().flat_map(|lit| lit.batches.values()))
        .flatten()
    {
        seen.insert(instance.id());
        draws += 1;
    }
    let visible: FastHashSet<InstanceId> = scene.opaques().visible.keys().copied().collect();
    assert_eq!(seen, visible);
    assert_eq!(visible.len(), 9);
    // 3 and 4 are lit by both lights.
    assert_eq!(draws, 3 + 4 + 4);

    for (id, lit) in &forward.lit {
        let per_light: usize = lit.batches.values().map(Vec::len).sum();
        assert_eq!(per_light, scene.opaques().lit[id].instances.len());
    }
}

#[test]
fn depth_batches_each_visible_instance_once() {
    let scene = busy_scene();
    let depth = batch_depth(&scene);
    let ids: Vec<InstanceId> = depth.values().flatten().map(|i| i.id()).collect();
    let unique: FastHashSet<_> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
    assert_eq!(unique.len(), scene.opaques().visible.len());
}

#[test]
fn shadows_are_independent_of_visibility() {
    let scene = busy_scene();
    let shadows = batch_shadows(&scene);

    let casters = |light: u64| -> Vec<u64> {
        shadows[&LightId::new(light)]
            .batches
            .values()
            .flatten()
            .map(|i| i.id().get())
            .collect()
    };
    assert_eq!(casters(1), [1, 2, 3, 4, 10]);
    assert_eq!(casters(3), [7]);
    assert!(!shadows.contains_key(&LightId::new(2)));

    let invisible = InstanceId::new(10);
    assert!(!scene.opaques().visible.contains_key(&invisible));
    let forward = batch_forward(&scene, &Capabilities::default());
    let drawn = forward
        .unlit
        .values()
        .chain(forward.lit.values().flat_map(|lit| lit.batches.values()))
        .flatten()
        .any(|i: &&InstanceOpaque| i.id() == invisible);
    assert!(!drawn);
}

#[test]
fn deferred_and_translucent_batches() {
    let scene = busy_scene();

    let deferred = batch_deferred(&scene);
    assert_eq!(deferred.len(), 1);
    let cellar = &deferred["cellar"];
    assert_eq!(cellar.lights.len(), 1);
    assert_eq!(cellar.batches.values().map(Vec::len).sum::<usize>(), 1);

    let draws = batch_translucent(&scene, &Capabilities::default());
    let ids: Vec<_> = draws.iter().map(|d| d.entry.id().get()).collect();
    assert_eq!(ids, [12, 12, 13]);
}

#[test]
fn batching_is_referentially_transparent() {
    let scene = busy_scene();
    let caps = Capabilities::new(false, 4);
    assert_eq!(batch_depth(&scene), batch_depth(&scene));
    assert_eq!(batch_forward(&scene, &caps), batch_forward(&scene, &caps));
    assert_eq!(batch_shadows(&scene), batch_shadows(&scene));
    assert_eq!(batch_deferred(&scene), batch_deferred(&scene));
    assert_eq!(batch_translucent(&scene, &caps), batch_translucent(&scene, &caps));
    assert_eq!(scene, busy_scene());
}
