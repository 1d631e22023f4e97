use glam::{Vec2, Vec3};
use sphere_match::camera::Camera;
use sphere_match::game::{MatchBoard, MatchGame};
use sphere_match::picking::{ndc_from_window, pick_sphere};
use sphere_match::scene::{palette_color, Scene, Sphere};

fn camera_looking_down_neg_z() -> Camera {
    // yaw = pi with zero pitch faces -Z in this camera's convention.
    Camera::new(Vec3::ZERO, std::f32::consts::PI, 0.0)
}

#[test]
fn center_click_picks_the_sphere_dead_ahead() {
    let mut scene = Scene::new();
    let id = scene.insert(Sphere::new(Vec3::new(0.0, 0.0, -20.0), 2.0, palette_color(0)));

    let camera = camera_looking_down_neg_z();
    let ndc = ndc_from_window((400.0, 300.0), (800, 600));
    let ray = camera.screen_ray(ndc, 800.0 / 600.0);

    assert_eq!(pick_sphere(&scene, &ray), Some(id));
}

#[test]
fn corner_click_misses_a_small_centered_sphere() {
    let mut scene = Scene::new();
    scene.insert(Sphere::new(Vec3::new(0.0, 0.0, -20.0), 0.5, palette_color(0)));

    let camera = camera_looking_down_neg_z();
    let ndc = ndc_from_window((0.0, 0.0), (800, 600));
    let ray = camera.screen_ray(ndc, 800.0 / 600.0);

    assert_eq!(pick_sphere(&scene, &ray), None);
}

#[test]
fn occluding_sphere_wins_the_pick() {
    let mut scene = Scene::new();
    let behind = scene.insert(Sphere::new(Vec3::new(0.0, 0.0, -40.0), 4.0, palette_color(1)));
    let front = scene.insert(Sphere::new(Vec3::new(0.0, 0.0, -15.0), 2.0, palette_color(2)));

    let camera = camera_looking_down_neg_z();
    let ray = camera.screen_ray(Vec2::ZERO, 1.0);

    let picked = pick_sphere(&scene, &ray);
    assert_eq!(picked, Some(front));
    assert_ne!(picked, Some(behind));
}

#[test]
fn click_pick_evaluate_round_trip() {
    // End-to-end: two same-colored spheres at separate screen positions,
    // picked via rays, matched by the game.
    let mut scene = Scene::new();
    let left = scene.insert(Sphere::new(Vec3::new(-5.0, 0.0, -20.0), 2.0, palette_color(3)));
    let right = scene.insert(Sphere::new(Vec3::new(5.0, 0.0, -20.0), 2.0, palette_color(3)));

    let camera = camera_looking_down_neg_z();
    let mut game: MatchGame<Scene> = MatchGame::new();

    // Aim at each sphere: at depth 20 with a 75 degree fov, x = +-5 sits
    // around ndc x = +-0.33.
    for ndc_x in [0.33_f32, -0.33_f32] {
        let ray = camera.screen_ray(Vec2::new(ndc_x, 0.0), 1.0);
        let picked = pick_sphere(&scene, &ray);
        assert!(picked.is_some(), "expected a hit at ndc x = {}", ndc_x);
        game.on_pick(picked);
    }

    game.evaluate(&mut scene);
    assert_eq!(game.score(), 1);
    assert!(scene.get(left).is_none());
    assert!(scene.get(right).is_none());
}

#[test]
fn removed_sphere_is_unpickable() {
    let mut scene = Scene::new();
    let id = scene.insert(Sphere::new(Vec3::new(0.0, 0.0, -20.0), 2.0, palette_color(0)));
    scene.remove(id);

    let camera = camera_looking_down_neg_z();
    let ray = camera.screen_ray(Vec2::ZERO, 1.0);
    assert_eq!(pick_sphere(&scene, &ray), None);
}
