use crate::types::schema::{Category, Question};

pub const IKI_CATEGORIES: &[Category] = &[
    Category {
        id: "iki_c1",
        name: "Elegibilidade Técnica",
        weight: 0.10,
        questions: &[
            Question {
                id: "iq1",
                text: "O projeto é tecnicamente adequado para atingir os objetivos da prioridade temática/país?",
            },
            Question {
                id: "iq2",
                text: "Há alinhamento claro com a prioridade IKI selecionada?",
            },
        ],
    },
    Category {
        id: "iki_c2",
        name: "Relevância NDC/NBSAP/NAP",
        weight: 0.15,
        questions: &[
            Question {
                id: "iq3",
                text: "O projeto contribui relevantemente para implementação de NDCs?",
            },
            Question {
                id: "iq4",
                text: "Há contribuição para NAPs (Planos Nacionais de Adaptação)?",
            },
            Question {
                id: "iq5",
                text: "Há contribuição para NBSAPs (Estratégias de Biodiversidade)?",
            },
        ],
    },
    Category {
        id: "iki_c3",
        name: "Conectividade com Políticas Nacionais/Regionais",
        weight: 0.10,
        questions: &[
            Question {
                id: "iq6",
                text: "O projeto se conecta com frameworks políticos e legais específicos?",
            },
            Question {
                id: "iq7",
                text: "Aproveita parcerias existentes?",
            },
            Question {
                id: "iq8",
                text: "Alinha-se com prioridades políticas do país/região?",
            },
        ],
    },
    Category {
        id: "iki_c4",
        name: "Relevância para ODSs",
        weight: 0.10,
        questions: &[
            Question {
                id: "iq9",
                text: "O projeto segue abordagem integrada da Agenda 2030?",
            },
            Question {
                id: "iq10",
                text: "Considera todos os ODS aplicáveis?",
            },
            Question {
                id: "iq11",
                text: "Conflitos potenciais entre objetivos são considerados?",
            },
        ],
    },
    Category {
        id: "iki_c5",
        name: "Apoio Político / Carta de Endosso",
        weight: 0.05,
        questions: &[
            Question {
                id: "iq12",
                text: "Há indicação de apoio governamental do país parceiro?",
            },
            Question {
                id: "iq13",
                text: "Cartas de endosso foram obtidas (quando necessário)?",
            },
        ],
    },
    Category {
        id: "iki_c6",
        name: "Teoria da Mudança / Cadeia de Resultados",
        weight: 0.15,
        questions: &[
            Question {
                id: "iq14",
                text: "A abordagem de solução é de alta qualidade segundo cadeia OCDE?",
            },
            Question {
                id: "iq15",
                text: "A solução é ambiciosa e realisticamente implementável?",
            },
            Question {
                id: "iq16",
                text: "Orçamento e cronograma são adequados?",
            },
        ],
    },
    Category {
        id: "iki_c7",
        name: "Ambição e Mensurabilidade",
        weight: 0.10,
        questions: &[
            Question {
                id: "iq17",
                text: "As metas são ambiciosas para o contexto do projeto?",
            },
            Question {
                id: "iq18",
                text: "O projeto é desenhado para resultados mensuráveis?",
            },
            Question {
                id: "iq19",
                text: "Há consideração direcionada de justiça de gênero?",
            },
        ],
    },
    Category {
        id: "iki_c8",
        name: "Transformação",
        weight: 0.10,
        questions: &[
            Question {
                id: "iq20",
                text: "O projeto visa mudanças sistêmicas?",
            },
            Question {
                id: "iq21",
                text: "Busca mudanças permanentes de comportamento em tomadores de decisão?",
            },
            Question {
                id: "iq22",
                text: "Impacta número considerável de indivíduos ou instituições?",
            },
        ],
    },
    Category {
        id: "iki_c9",
        name: "Inovação",
        weight: 0.05,
        questions: &[
            Question {
                id: "iq23",
                text: "O projeto oferece solução inovadora para a região específica?",
            },
        ],
    },
    Category {
        id: "iki_c10",
        name: "Riscos Ambientais e Sociais / Salvaguardas",
        weight: 0.05,
        questions: &[
            Question {
                id: "iq24",
                text: "Riscos ambientais e sociais são apresentados de forma compreensível?",
            },
            Question {
                id: "iq25",
                text: "Medidas de salvaguarda são apropriadas?",
            },
            Question {
                id: "iq26",
                text: "Há compromisso com Safeguards Standards?",
            },
        ],
    },
    Category {
        id: "iki_c11",
        name: "Promoção de Justiça de Gênero",
        weight: 0.10,
        questions: &[
            Question {
                id: "iq27",
                text: "Há medidas específicas contra papéis/relações/normas desiguais de gênero?",
            },
            Question {
                id: "iq28",
                text: "A abordagem gender-responsive é plausível?",
            },
            Question {
                id: "iq29",
                text: "Medidas são reconhecíveis na cadeia de resultados?",
            },
        ],
    },
    Category {
        id: "iki_c12",
        name: "Participação e Transferência de Conhecimento",
        weight: 0.05,
        questions: &[
            Question {
                id: "iq30",
                text: "Como grupos-alvo foram/serão incluídos no design?",
            },
            Question {
                id: "iq31",
                text: "Como conhecimento será transferido aos grupos-alvo?",
            },
        ],
    },
    Category {
        id: "iki_c13",
        name: "Estratégia de Saída",
        weight: 0.05,
        questions: &[
            Question {
                id: "iq32",
                text: "Como atividades continuarão após fim do financiamento IKI?",
            },
            Question {
                id: "iq33",
                text: "A sustentabilidade é plausível e bem planejada?",
            },
        ],
    },
    Category {
        id: "iki_c14",
        name: "Replicabilidade",
        weight: 0.05,
        questions: &[
            Question {
                id: "iq34",
                text: "O projeto pode ser replicado em outros países/regiões?",
            },
            Question {
                id: "iq35",
                text: "Pode ser replicado em outros setores?",
            },
        ],
    },
];
