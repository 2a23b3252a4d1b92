//! Perspektivische 3D-Kamera für Pick-Rays und Projektion.

use glam::{Mat4, Vec2, Vec3};

use super::Ray;

/// Sichtbarer Bereich des Canvas in Screen-Koordinaten (Bounding-Rect).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    /// Linke obere Ecke in Screen-Pixeln
    pub min: Vec2,
    /// Breite und Höhe in Screen-Pixeln
    pub size: Vec2,
}

impl CanvasRect {
    /// Erstellt ein neues Canvas-Rect
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }
}

/// Konvertiert Screen-Koordinaten zu Normalized Device Coordinates.
///
/// Ergebnis liegt in [-1,1]×[-1,1]. Die vertikale Achse wird gespiegelt:
/// Screen-Y wächst nach unten, Szenen-Y nach oben.
pub fn screen_to_ndc(screen_pos: Vec2, canvas: &CanvasRect) -> Vec2 {
    let local = (screen_pos - canvas.min) / canvas.size;
    Vec2::new(local.x * 2.0 - 1.0, -(local.y * 2.0 - 1.0))
}

/// Perspektivische Kamera mit Position und Blickziel
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec3,
    /// Blickziel in Welt-Koordinaten
    pub target: Vec3,
    /// Up-Vektor (normalerweise +Y)
    pub up: Vec3,
    /// Vertikaler Öffnungswinkel in Radiant
    pub fov_y: f32,
    /// Seitenverhältnis Breite/Höhe
    pub aspect: f32,
    /// Nahe Clipping-Ebene
    pub z_near: f32,
    /// Ferne Clipping-Ebene
    pub z_far: f32,
}

impl Camera3D {
    /// Standard-Öffnungswinkel in Grad.
    pub const FOV_Y_DEG: f32 = 45.0;
    /// Standard-Clipping-Ebenen.
    pub const Z_NEAR: f32 = 0.1;
    pub const Z_FAR: f32 = 2000.0;

    /// Erstellt eine neue Kamera mit Standard-Öffnungswinkel
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fov_y: Self::FOV_Y_DEG.to_radians(),
            aspect: 1.0,
            z_near: Self::Z_NEAR,
            z_far: Self::Z_FAR,
        }
    }

    /// Setzt das Seitenverhältnis (bei Viewport-Resize)
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect.max(f32::EPSILON);
    }

    /// Richtet die Kamera auf einen Punkt aus
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Gibt die View-Matrix zurück
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Gibt die Projektions-Matrix zurück (Depth-Range 0..1)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far)
    }

    /// Konstruiert den Pick-Ray durch einen NDC-Punkt.
    ///
    /// Ursprung ist die Kamera-Position, Richtung zeigt durch den
    /// entprojizieren Punkt auf der nahen Clipping-Ebene.
    pub fn pick_ray(&self, ndc: Vec2) -> Ray {
        let inverse = (self.projection_matrix() * self.view_matrix()).inverse();
        let near = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray::new(self.position, (far - near).normalize())
    }

    /// Projiziert einen Weltpunkt zurück nach NDC.
    pub fn project_to_ndc(&self, world: Vec3) -> Vec2 {
        let ndc = (self.projection_matrix() * self.view_matrix()).project_point3(world);
        Vec2::new(ndc.x, ndc.y)
    }
}
