//! Datenmodell des 3D-Diagramms: Nodes, Linien und deren Container.

use std::collections::HashMap;

use glam::Vec3;

/// Darstellungsart einer Linie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Gerade Verbindung zwischen den Endpunkten
    #[default]
    Straight,
    /// Gebogene Verbindung; die Krümmung bestimmt der Offset-Skalar
    Curved,
}

/// Einzelner Knoten des Diagramms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramNode {
    /// Eindeutige ID
    pub id: u64,
    /// Position in Welt-Koordinaten
    pub position: Vec3,
}

impl DiagramNode {
    /// Erstellt einen neuen Node
    pub fn new(id: u64, position: Vec3) -> Self {
        Self { id, position }
    }
}

/// Linie zwischen zwei Endpunkten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramLine {
    /// Eindeutige ID
    pub id: u64,
    /// Erster Endpunkt in Welt-Koordinaten
    pub start: Vec3,
    /// Zweiter Endpunkt in Welt-Koordinaten
    pub end: Vec3,
    /// Darstellungsart (gerade oder gebogen)
    pub style: LineStyle,
    /// Dimensionslose senkrechte Auslenkung der Kurve von der Sehne
    pub offset: f32,
}

impl DiagramLine {
    /// Erstellt eine neue gerade Linie
    pub fn new(id: u64, start: Vec3, end: Vec3) -> Self {
        Self {
            id,
            start,
            end,
            style: LineStyle::Straight,
            offset: 0.0,
        }
    }
}

/// Container für alle ziehbaren Elemente eines Diagramms.
///
/// Das Diagramm gehört dem Host (Scene-Graph); der Controller borgt es sich
/// pro Aufruf und hält zwischen Events nur die ID des gezogenen Elements.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    /// Alle Nodes, indexiert nach ihrer ID
    nodes: HashMap<u64, DiagramNode>,
    /// Alle Linien, indexiert nach ihrer ID
    lines: HashMap<u64, DiagramLine>,
}

impl Diagram {
    /// Erstellt ein leeres Diagramm
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Node hinzu
    pub fn add_node(&mut self, node: DiagramNode) {
        self.nodes.insert(node.id, node);
    }

    /// Fügt eine Linie hinzu
    pub fn add_line(&mut self, line: DiagramLine) {
        self.lines.insert(line.id, line);
    }

    /// Findet einen Node — O(1)
    pub fn node(&self, node_id: u64) -> Option<&DiagramNode> {
        self.nodes.get(&node_id)
    }

    /// Findet eine Linie — O(1)
    pub fn line(&self, line_id: u64) -> Option<&DiagramLine> {
        self.lines.get(&line_id)
    }

    /// Aktualisiert die Position eines Nodes
    pub fn update_node_position(&mut self, node_id: u64, new_position: Vec3) -> bool {
        let Some(node) = self.nodes.get_mut(&node_id) else {
            return false;
        };

        node.position = new_position;
        true
    }

    /// Setzt eine Linie auf gebogene Darstellung mit dem gegebenen Offset
    pub fn set_line_curve(&mut self, line_id: u64, offset: f32) -> bool {
        let Some(line) = self.lines.get_mut(&line_id) else {
            return false;
        };

        line.style = LineStyle::Curved;
        line.offset = offset;
        true
    }

    /// Gibt die Anzahl der Nodes zurück
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt die Anzahl der Linien zurück
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
