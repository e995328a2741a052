// CLI argument surface. The action is a plain positional string rather
// than a clap subcommand so that unknown names flow through the
// dispatcher's own `InvalidAction` error, matching the rest of the
// argument taxonomy.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pixtrack",
    version,
    about = "Track daily habits on a pixe.la graph from the command line"
)]
pub struct Cli {
    /// Action to perform: create_user, create_graph, add_pixel,
    /// delete_graph or get_user
    pub action: String,

    /// Your pixe.la username
    #[arg(long)]
    pub username: String,

    /// Your pixe.la API token
    #[arg(long)]
    pub token: String,

    /// Graph ID (required for graph actions)
    #[arg(long = "graph_id")]
    pub graph_id: Option<String>,

    /// Quantity for the pixel (required for add_pixel)
    #[arg(long)]
    pub quantity: Option<String>,

    /// Date for the pixel as YYYY-MM-DD (required for add_pixel)
    #[arg(long)]
    pub date: Option<String>,

    /// Display name for a new graph (create_graph)
    #[arg(long)]
    pub name: Option<String>,

    /// Unit for a new graph, e.g. commit, hour (create_graph;
    /// prompted for when omitted)
    #[arg(long)]
    pub unit: Option<String>,

    /// Color for a new graph, canonical or alias, e.g. momiji or red
    /// (create_graph; prompted for when omitted)
    #[arg(long)]
    pub color: Option<String>,
}
