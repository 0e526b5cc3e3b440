//! Movement domain: ground and wall probes backed by Avian spatial queries.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, PhysicsQuery, SurfaceHit, SurfaceKind};

/// [`PhysicsQuery`] over the live physics world.
pub(crate) struct SpatialProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
}

impl<'a, 'w, 's> SpatialProbe<'a, 'w, 's> {
    pub(crate) fn new(spatial_query: &'a SpatialQuery<'w, 's>) -> Self {
        Self { spatial_query }
    }
}

fn surface_filter(surface: SurfaceKind) -> SpatialQueryFilter {
    match surface {
        SurfaceKind::Ground => SpatialQueryFilter::from_mask(GameLayer::Ground),
        SurfaceKind::Wall => SpatialQueryFilter::from_mask(GameLayer::Wall),
    }
}

impl PhysicsQuery for SpatialProbe<'_, '_, '_> {
    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Dir3,
        max_distance: f32,
        surface: SurfaceKind,
    ) -> Option<SurfaceHit> {
        self.spatial_query
            .cast_ray(
                origin,
                direction,
                max_distance,
                true,
                &surface_filter(surface),
            )
            .map(|hit| SurfaceHit { normal: hit.normal })
    }

    fn cast_sphere(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Dir3,
        max_distance: f32,
        surface: SurfaceKind,
    ) -> Option<SurfaceHit> {
        let shape = Collider::sphere(radius);
        let config = ShapeCastConfig::from_max_distance(max_distance);

        self.spatial_query
            .cast_shape(
                &shape,
                origin,
                Quat::IDENTITY,
                direction,
                &config,
                &surface_filter(surface),
            )
            // normal1 belongs to the surface that was hit
            .map(|hit| SurfaceHit {
                normal: hit.normal1,
            })
    }
}
